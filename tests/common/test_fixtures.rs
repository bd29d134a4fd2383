//! Test fixtures for remotes, catalogs and exclusion files

use std::path::{Path, PathBuf};

use bootstrap_manifest::domain::entities::bootstrap_config::BootstrapConfig;
use git2::{Oid, Repository, Signature};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CATALOG_PATH: &str = "/cgi-bin/build/repolist.cgi";

/// A directory of bare repositories addressed as `<root>/<name>.git`
pub struct RemoteFixture {
    root: TempDir,
}

impl RemoteFixture {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Remote URL template pointing at this fixture
    pub fn url_template(&self) -> String {
        format!("{}/{{name}}.git", self.root.path().display())
    }

    /// Create a bare repository with one commit per branch and return the
    /// commit ids in the same order as `branches`
    pub fn create_repository(&self, name: &str, branches: &[&str]) -> Vec<String> {
        let repo = Repository::init_bare(self.root.path().join(format!("{name}.git"))).unwrap();

        branches
            .iter()
            .map(|branch| commit_on(&repo, name, branch).to_string())
            .collect()
    }

    /// Create a bare repository with no branches at all
    pub fn create_empty_repository(&self, name: &str) {
        Repository::init_bare(self.root.path().join(format!("{name}.git"))).unwrap();
    }
}

fn commit_on(repo: &Repository, name: &str, branch: &str) -> Oid {
    let sig = Signature::now("Test", "test@example.com").unwrap();
    let tree_id = repo.treebuilder(None).unwrap().write().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    repo.commit(
        Some(&format!("refs/heads/{branch}")),
        &sig,
        &sig,
        &format!("{name}: initial commit on {branch}"),
        &tree,
        &[],
    )
    .unwrap()
}

/// Start a catalog server answering `body` with the given status
pub async fn start_catalog(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

/// Settings wired to a mock catalog and a local remote fixture
pub fn settings_for(server: &MockServer, remotes: &RemoteFixture) -> BootstrapConfig {
    BootstrapConfig::new()
        .with_catalog_url(format!("{}{}", server.uri(), CATALOG_PATH))
        .with_remote_url_template(remotes.url_template())
        .with_http_timeout_secs(5)
}

/// Write an exclusion file into `dir`
pub fn write_exclusion_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("excludedGit.txt");
    std::fs::write(&path, content).unwrap();
    path
}
