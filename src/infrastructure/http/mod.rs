pub mod catalog_source;
pub mod http_catalog;

pub use catalog_source::{CatalogError, CatalogSource};
pub use http_catalog::HttpCatalogClient;
