mod advertisement;
pub mod git2_ref_lister;
pub mod ref_lister;

// Re-export main types for convenience
pub use git2_ref_lister::Git2RefLister;
pub use ref_lister::{RefListError, RemoteHead, RemoteRefLister};
