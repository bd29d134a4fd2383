/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - Repository catalog download over HTTP
/// - Remote branch head listing through libgit2
/// - Exclusion list file reading
pub mod filesystem;
pub mod git;
pub mod http;

// Re-export commonly used types
pub use filesystem::ExclusionStore;
pub use git::{Git2RefLister, RefListError, RemoteHead, RemoteRefLister};
pub use http::{CatalogError, CatalogSource, HttpCatalogClient};
