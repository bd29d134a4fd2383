//! # bootstrap-manifest - Branch Manifest Generator
//!
//! `bootstrap-manifest` prints, for every git repository listed in a remote
//! catalog, the commit its requested branch points at:
//!
//! ```text
//! <repository-name> <commit-hash> <branch-used>
//! ```
//!
//! Repositories named in a local exclusion file are skipped. When a repository
//! has no branch of the requested name its `master` head is recorded instead.
//! Repositories that have neither are reported on stderr and left out.
//!
//! ## Quick Start
//!
//! ```bash
//! bootstrap-manifest release excludedGit.txt > manifest.txt
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: Repository names, branch names, catalog and manifest entries
//! - [`application`]: The manifest loader, branch resolver and generation pipeline
//! - [`infrastructure`]: HTTP catalog download, libgit2 remote listing, file reading
//! - [`presentation`]: CLI interface
//! - [`common`]: Shared error handling
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use bootstrap_manifest::application::use_cases::generate_manifest::{
//!     GenerateManifestConfig, GenerateManifestUseCase,
//! };
//! use bootstrap_manifest::domain::entities::bootstrap_config::BootstrapConfig;
//!
//! # async fn example() -> bootstrap_manifest::Result<()> {
//! let settings = BootstrapConfig::new()
//!     .with_catalog_url("http://localhost:8080/repolist.cgi")
//!     .with_remote_url_template("/srv/git/{name}.git");
//!
//! let config = GenerateManifestConfig::new("release", "excludedGit.txt");
//! let use_case = GenerateManifestUseCase::from_settings(config, &settings)?;
//!
//! let report = use_case
//!     .execute(&mut std::io::stdout(), &mut std::io::stderr())
//!     .await?;
//! eprintln!("{} repositories resolved", report.resolved_count());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::BootstrapError;
pub use crate::common::result::BootstrapResult as Result;
