//! Git repository fixtures built with `git2`.
//!
//! No `git` binary is required, so these work on any CI image.

use std::fs;
use std::path::Path;

use git2::{Oid, Repository, Signature};

/// Initialises a repository with no commits.
///
/// Describing `HEAD` fails here, which is what tests of an unavailable
/// revision need.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn empty_repo(path: &Path) -> Repository {
    Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "empty_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Initialises a repository with a single commit of `README.md` and returns
/// the commit id.
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_commit(path: &Path) -> Oid {
    let repo = empty_repo(path);
    fs::write(path.join("README.md"), "# Test")
        .unwrap_or_else(|e| panic!("repo_with_commit: failed to write README.md: {e}"));
    commit_all(&repo, "Initial commit")
}

/// Initialises a repository with one commit carrying the annotated tag `tag`.
///
/// # Panics
/// Panics if any git operation fails.
pub fn tagged_repo(path: &Path, tag: &str) -> Oid {
    let oid = repo_with_commit(path);
    let repo = Repository::open(path)
        .unwrap_or_else(|e| panic!("tagged_repo: failed to open repository: {e}"));
    let target = repo
        .find_object(oid, None)
        .unwrap_or_else(|e| panic!("tagged_repo: commit {oid} not found: {e}"));
    repo.tag(tag, &target, &signature(), tag, false)
        .unwrap_or_else(|e| panic!("tagged_repo: failed to create tag {tag}: {e}"));
    oid
}

fn signature() -> Signature<'static> {
    Signature::now("Test User", "test@test.com")
        .unwrap_or_else(|e| panic!("signature: invalid test identity: {e}"))
}

fn commit_all(repo: &Repository, message: &str) -> Oid {
    let mut index = repo
        .index()
        .unwrap_or_else(|e| panic!("commit_all: failed to open index: {e}"));
    index
        .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
        .unwrap_or_else(|e| panic!("commit_all: failed to stage files: {e}"));
    index
        .write()
        .unwrap_or_else(|e| panic!("commit_all: failed to write index: {e}"));
    let tree_id = index
        .write_tree()
        .unwrap_or_else(|e| panic!("commit_all: failed to write tree: {e}"));
    let tree = repo
        .find_tree(tree_id)
        .unwrap_or_else(|e| panic!("commit_all: tree {tree_id} not found: {e}"));

    let sig = signature();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
        .unwrap_or_else(|e| panic!("commit_all: failed to commit: {e}"))
}
