//! Commit metadata supplied by the CI environment.

use serde::{Deserialize, Serialize};

/// Author or committer identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitUser {
    pub email: String,
    pub name: String,
    pub username: String,
}

/// Commit that produced a benchmark run.
///
/// Field order matches the JSON layout consumed by the benchmark dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    pub author: GitUser,
    pub committer: GitUser,
    pub distinct: bool,
    pub id: String,
    pub message: String,
    pub timestamp: String,
    pub tree_id: String,
    pub url: String,
}

impl CommitInfo {
    /// Read commit metadata from `COMMIT_*` environment variables.
    ///
    /// Unset variables become empty strings.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build commit metadata from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).unwrap_or_default();
        Self {
            author: GitUser {
                email: var("COMMIT_AUTHOR_EMAIL"),
                name: var("COMMIT_AUTHOR_NAME"),
                username: var("COMMIT_AUTHOR_USERNAME"),
            },
            committer: GitUser {
                email: var("COMMIT_COMMITTER_EMAIL"),
                name: var("COMMIT_COMMITTER_NAME"),
                username: var("COMMIT_COMMITTER_USERNAME"),
            },
            distinct: true,
            id: var("COMMIT_ID"),
            message: var("COMMIT_MESSAGE"),
            timestamp: var("COMMIT_TIMESTAMP"),
            tree_id: var("COMMIT_TREE_ID"),
            url: var("COMMIT_URL"),
        }
    }
}

impl Default for CommitInfo {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("COMMIT_ID", "9dd1ab08"),
            ("COMMIT_AUTHOR_NAME", "Jane"),
            ("COMMIT_COMMITTER_USERNAME", "web-flow"),
        ]
        .into_iter()
        .collect();

        let commit = CommitInfo::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(commit.id, "9dd1ab08");
        assert_eq!(commit.author.name, "Jane");
        assert_eq!(commit.author.email, "");
        assert_eq!(commit.committer.username, "web-flow");
        assert!(commit.distinct);
    }

    #[test]
    fn test_serialized_field_order() {
        let json = serde_json::to_string(&CommitInfo::default()).unwrap();
        let author = json.find("\"author\"").unwrap();
        let committer = json.find("\"committer\"").unwrap();
        let url = json.find("\"url\"").unwrap();
        assert!(author < committer && committer < url);
        assert!(json.contains("\"distinct\":true"));
    }
}
