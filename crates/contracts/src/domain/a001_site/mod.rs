pub mod aggregate;
pub mod store;

pub use aggregate::{NewSiteDto, Site, SiteError, SiteId, SiteStatus};
pub use store::SiteStore;
