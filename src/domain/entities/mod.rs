pub mod bootstrap_config;
pub mod catalog;
pub mod manifest;
