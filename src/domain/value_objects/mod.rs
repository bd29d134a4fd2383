pub mod branch_name;
pub mod commit_hash;
pub mod exclusion_set;
pub mod remote_url_template;
pub mod repository_name;
