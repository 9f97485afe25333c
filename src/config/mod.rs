//! Configuration module

mod site;

pub use site::CategoryEntry;
pub use site::SiteConfig;
