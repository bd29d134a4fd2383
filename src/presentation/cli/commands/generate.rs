use anyhow::Result;
use std::io;
use std::path::PathBuf;

use crate::application::use_cases::generate_manifest::{
    GenerateManifestConfig, GenerateManifestReport, GenerateManifestUseCase,
};
use crate::domain::entities::bootstrap_config::BootstrapConfig;

/// Handler for the manifest generation run
pub struct GenerateCommand {
    pub branch: String,
    pub exclusion_file: PathBuf,
    pub settings: BootstrapConfig,
}

impl GenerateCommand {
    pub fn new(branch: String, exclusion_file: PathBuf, settings: BootstrapConfig) -> Self {
        Self {
            branch,
            exclusion_file,
            settings,
        }
    }

    /// Stream the manifest to stdout and lookup failures to stderr
    pub async fn execute(&self) -> Result<GenerateManifestReport> {
        let config = GenerateManifestConfig::new(self.branch.clone(), self.exclusion_file.clone());
        let use_case = GenerateManifestUseCase::from_settings(config, &self.settings)?;

        // Unlocked handles: the ref listing runs on a blocking thread that may log to stderr.
        let report = use_case
            .execute(&mut io::stdout(), &mut io::stderr())
            .await?;

        Ok(report)
    }
}
