//! Configuration module

mod site;

pub use site::HighlightConfig;
pub use site::HomeConfig;
pub use site::ImageConfig;
pub use site::ImageLayout;
pub use site::SiteConfig;
