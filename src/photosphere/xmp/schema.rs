//! Serde mapping for `x:xmpmeta/rdf:RDF/rdf:Description`.
//!
//! Producers write GPano properties either as attributes of the description
//! or as child elements of the same name, so both forms are mapped and merged
//! afterwards. quick-xml matches on local names, which drops the `GPano:`
//! prefix; the namespace binding keeps its full `xmlns:GPano` name.

use serde::Deserialize;

use crate::photosphere::xmp::types::{PanoramaGeometry, GPANO_NAMESPACE};

#[derive(Debug, Deserialize)]
pub(crate) struct XmpMeta {
    #[serde(rename = "RDF")]
    rdf: Rdf,
}

#[derive(Debug, Deserialize)]
struct Rdf {
    #[serde(rename = "Description", default)]
    descriptions: Vec<PanoDescription>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PanoDescription {
    #[serde(rename = "@xmlns:GPano", default)]
    namespace: String,

    #[serde(rename = "@FullPanoWidthPixels", default)]
    total_width: i64,
    #[serde(rename = "@FullPanoHeightPixels", default)]
    total_height: i64,
    #[serde(rename = "@CroppedAreaLeftPixels", default)]
    left: i64,
    #[serde(rename = "@CroppedAreaTopPixels", default)]
    top: i64,
    #[serde(rename = "@CroppedAreaImageWidthPixels", default)]
    width: i64,
    #[serde(rename = "@CroppedAreaImageHeightPixels", default)]
    height: i64,
    #[serde(rename = "@PoseHeadingDegrees", default)]
    heading: f64,

    // Element instead of attribute.
    #[serde(rename = "FullPanoWidthPixels", default)]
    element_total_width: i64,
    #[serde(rename = "FullPanoHeightPixels", default)]
    element_total_height: i64,
    #[serde(rename = "CroppedAreaLeftPixels", default)]
    element_left: i64,
    #[serde(rename = "CroppedAreaTopPixels", default)]
    element_top: i64,
    #[serde(rename = "CroppedAreaImageWidthPixels", default)]
    element_width: i64,
    #[serde(rename = "CroppedAreaImageHeightPixels", default)]
    element_height: i64,
    #[serde(rename = "PoseHeadingDegrees", default)]
    element_heading: f64,
}

/// Deserializes an XMP packet (sentinel already stripped).
pub(crate) fn parse_packet(xml: &[u8]) -> Result<XmpMeta, quick_xml::de::DeError> {
    quick_xml::de::from_reader(xml)
}

impl XmpMeta {
    /// First description that binds the GPano namespace.
    pub(crate) fn into_panorama_description(self) -> Option<PanoDescription> {
        self.rdf
            .descriptions
            .into_iter()
            .find(|d| d.namespace == GPANO_NAMESPACE)
    }
}

impl PanoDescription {
    /// Merges attribute and element forms. An attribute equal to zero counts
    /// as unset and takes the element value, so a real heading of 0° written
    /// next to a non-zero element heading resolves to the element's value.
    pub(crate) fn normalize(self) -> PanoramaGeometry {
        PanoramaGeometry {
            total_width: or_element(self.total_width, self.element_total_width),
            total_height: or_element(self.total_height, self.element_total_height),
            crop_left: or_element(self.left, self.element_left),
            crop_top: or_element(self.top, self.element_top),
            crop_width: or_element(self.width, self.element_width),
            crop_height: or_element(self.height, self.element_height),
            heading_degrees: or_element(self.heading, self.element_heading),
            namespace: self.namespace,
        }
    }
}

fn or_element<T: PartialEq + Default>(attribute: T, element: T) -> T {
    if attribute == T::default() {
        element
    } else {
        attribute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTRIBUTE_FORM: &str = r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""
        xmlns:GPano="http://ns.google.com/photos/1.0/panorama/"
        GPano:ProjectionType="equirectangular"
        GPano:FullPanoWidthPixels="8192"
        GPano:FullPanoHeightPixels="4096"
        GPano:CroppedAreaLeftPixels="1024"
        GPano:CroppedAreaTopPixels="512"
        GPano:CroppedAreaImageWidthPixels="6144"
        GPano:CroppedAreaImageHeightPixels="3072"
        GPano:PoseHeadingDegrees="182.5"/>
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#;

    const ELEMENT_FORM: &str = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about="" xmlns:GPano="http://ns.google.com/photos/1.0/panorama/">
      <GPano:ProjectionType>equirectangular</GPano:ProjectionType>
      <GPano:FullPanoWidthPixels>8192</GPano:FullPanoWidthPixels>
      <GPano:FullPanoHeightPixels>4096</GPano:FullPanoHeightPixels>
      <GPano:CroppedAreaLeftPixels>1024</GPano:CroppedAreaLeftPixels>
      <GPano:CroppedAreaTopPixels>512</GPano:CroppedAreaTopPixels>
      <GPano:CroppedAreaImageWidthPixels>6144</GPano:CroppedAreaImageWidthPixels>
      <GPano:CroppedAreaImageHeightPixels>3072</GPano:CroppedAreaImageHeightPixels>
      <GPano:PoseHeadingDegrees>182.5</GPano:PoseHeadingDegrees>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>"#;

    fn resolve(xml: &str) -> Option<PanoramaGeometry> {
        parse_packet(xml.as_bytes())
            .unwrap()
            .into_panorama_description()
            .map(PanoDescription::normalize)
    }

    fn expected() -> PanoramaGeometry {
        PanoramaGeometry {
            total_width: 8192,
            total_height: 4096,
            crop_left: 1024,
            crop_top: 512,
            crop_width: 6144,
            crop_height: 3072,
            heading_degrees: 182.5,
            namespace: GPANO_NAMESPACE.to_string(),
        }
    }

    #[test]
    fn test_attribute_form() {
        assert_eq!(resolve(ATTRIBUTE_FORM), Some(expected()));
    }

    #[test]
    fn test_element_form_matches_attribute_form() {
        assert_eq!(resolve(ELEMENT_FORM), resolve(ATTRIBUTE_FORM));
    }

    #[test]
    fn test_mixed_form_only_height_as_element() {
        let xml = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""
        xmlns:GPano="http://ns.google.com/photos/1.0/panorama/"
        GPano:FullPanoWidthPixels="8192"
        GPano:CroppedAreaLeftPixels="1024"
        GPano:CroppedAreaTopPixels="512"
        GPano:CroppedAreaImageWidthPixels="6144"
        GPano:CroppedAreaImageHeightPixels="3072"
        GPano:PoseHeadingDegrees="182.5">
      <GPano:FullPanoHeightPixels>4096</GPano:FullPanoHeightPixels>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>"#;

        assert_eq!(resolve(xml), Some(expected()));
    }

    #[test]
    fn test_non_zero_attribute_wins_over_element() {
        let xml = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description xmlns:GPano="http://ns.google.com/photos/1.0/panorama/"
        GPano:FullPanoWidthPixels="100">
      <GPano:FullPanoWidthPixels>999</GPano:FullPanoWidthPixels>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>"#;

        assert_eq!(resolve(xml).unwrap().total_width, 100);
    }

    #[test]
    fn test_zero_heading_attribute_takes_element_value() {
        let xml = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description xmlns:GPano="http://ns.google.com/photos/1.0/panorama/"
        GPano:PoseHeadingDegrees="0">
      <GPano:PoseHeadingDegrees>90</GPano:PoseHeadingDegrees>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>"#;

        assert_eq!(resolve(xml).unwrap().heading_degrees, 90.0);
    }

    #[test]
    fn test_other_namespace_is_not_a_panorama() {
        let xml = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""
        xmlns:GPano="http://example.com/not-panorama/"
        GPano:FullPanoWidthPixels="8192"/>
  </rdf:RDF>
</x:xmpmeta>"#;

        assert_eq!(resolve(xml), None);
    }

    #[test]
    fn test_panorama_description_among_others() {
        let xml = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about="" xmlns:xmp="http://ns.adobe.com/xap/1.0/"
        xmp:CreatorTool="Camera"/>
    <rdf:Description rdf:about=""
        xmlns:GPano="http://ns.google.com/photos/1.0/panorama/"
        GPano:FullPanoWidthPixels="8192"/>
  </rdf:RDF>
</x:xmpmeta>"#;

        assert_eq!(resolve(xml).unwrap().total_width, 8192);
    }

    #[test]
    fn test_malformed_packet_is_rejected() {
        assert!(parse_packet(b"<x:xmpmeta><rdf:RDF><rdf:Description").is_err());
        assert!(parse_packet(b"<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"/>").is_err());
    }
}
