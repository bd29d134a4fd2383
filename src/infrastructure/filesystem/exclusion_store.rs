use std::path::Path;
use tracing::debug;

use crate::common::error::BootstrapError;
use crate::common::result::BootstrapResult;
use crate::domain::value_objects::exclusion_set::ExclusionSet;

/// Reads the locally maintained list of excluded repositories
#[derive(Debug, Default, Clone)]
pub struct ExclusionStore;

impl ExclusionStore {
    pub fn new() -> Self {
        Self
    }

    /// Load the exclusion list at `path`
    ///
    /// An unreadable file is a configuration error: silently treating it as
    /// empty would put excluded repositories back into the manifest.
    pub async fn read(&self, path: &Path) -> BootstrapResult<ExclusionSet> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            BootstrapError::config_error_with_source(
                format!("Unable to read excluded git repos file {}", path.display()),
                Some(path.to_path_buf()),
                e,
            )
        })?;

        let exclusions = ExclusionSet::parse(&content);
        debug!(path = %path.display(), count = exclusions.len(), "loaded exclusion list");
        Ok(exclusions)
    }
}
