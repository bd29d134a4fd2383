pub mod exclusion_store;

pub use exclusion_store::ExclusionStore;
