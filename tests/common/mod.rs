//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests: local bare repositories acting
//! as remotes and a mock HTTP server serving the repository catalog.
#![allow(dead_code)]

pub mod test_fixtures;
