pub mod logger;
pub mod photosphere;
