//! Version-control revision lookup for the build banner

use std::path::{Path, PathBuf};

use git2::{DescribeFormatOptions, DescribeOptions, Repository};

use crate::error::{Error, Result};

/// Where the revision string stamped into bundles comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionSource {
    /// Describe `HEAD` of the repository containing this path, equivalent to
    /// `git describe --always`.
    Git(PathBuf),

    /// Use this string verbatim.
    Fixed(String),
}

impl RevisionSource {
    /// Resolve the revision string.
    ///
    /// Reads repository metadata only; repeated calls return the same value as
    /// long as the repository is unchanged.
    pub fn version(&self) -> Result<String> {
        match self {
            RevisionSource::Fixed(revision) => Ok(revision.clone()),
            RevisionSource::Git(path) => describe_head(path),
        }
    }
}

fn describe_head(path: &Path) -> Result<String> {
    let unavailable = |source: git2::Error| Error::RevisionUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let repo = Repository::discover(path).map_err(unavailable)?;

    let mut options = DescribeOptions::new();
    options.show_commit_oid_as_fallback(true);
    let describe = repo.describe(&options).map_err(unavailable)?;

    let revision = describe
        .format(Some(&DescribeFormatOptions::new()))
        .map_err(unavailable)?;
    tracing::debug!(path = %path.display(), %revision, "Described repository HEAD");
    Ok(revision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fixed_revision_is_returned_verbatim() {
        let source = RevisionSource::Fixed("v1.4.0-3-gdeadbee".to_string());
        assert_eq!(source.version().unwrap(), "v1.4.0-3-gdeadbee");
    }

    #[test]
    fn directory_outside_any_repository_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("not-a-repo");
        std::fs::create_dir(&nested).unwrap();

        // Discovery walks upwards; guard against a temp dir that lives inside a repo
        if Repository::discover(&nested).is_ok() {
            return;
        }

        let err = RevisionSource::Git(nested.clone()).version().unwrap_err();
        match err {
            Error::RevisionUnavailable { path, .. } => assert_eq!(path, nested),
            other => panic!("unexpected error: {other}"),
        }
    }
}
