pub mod generate_manifest;
pub mod load_manifest;
pub mod resolve_branch;
