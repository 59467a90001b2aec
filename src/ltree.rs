//! L-Tree: scope path berbasis titik
//!
//! Contoh: `org.team.service`. Segmen diurutkan dari scope terluas ke
//! tersempit dan selalu lower-case. Query boleh memakai `*` sebagai
//! wildcard untuk satu segmen penuh.

use crate::util::strings::split_by_char;
use serde::{Deserialize, Serialize};
use std::fmt;

const SEPARATOR: char = '.';
const WILDCARD: &str = "*";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LTree(String);

impl LTree {
    /// Menggabungkan `segments` dengan `.` lalu lower-case
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(".");
        Self(joined.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> Vec<&str> {
        split_by_char(&self.0, SEPARATOR)
    }

    /// Tree baru dengan `segments` di depan (scope lebih luas)
    pub fn prefix<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined: Vec<String> = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        joined.extend(self.segments().into_iter().map(str::to_string));
        Self::new(joined)
    }

    /// Tree baru dengan `segments` di belakang (scope lebih sempit)
    pub fn postfix<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined: Vec<String> = self.segments().into_iter().map(str::to_string).collect();
        joined.extend(segments.into_iter().map(|s| s.as_ref().to_string()));
        Self::new(joined)
    }

    /// Cek apakah `query` cocok dengan tree ini.
    ///
    /// Tree kosong hanya cocok dengan `"*"`. Selain itu segmen query
    /// dibandingkan berurutan dengan segmen awal tree.
    pub fn matches(&self, query: &str) -> bool {
        if self.is_empty() {
            return query == WILDCARD;
        }

        let query = query.to_lowercase();
        match_segments(&self.segments(), &split_by_char(&query, SEPARATOR))
    }
}

/// Matching level rendah untuk iterator custom.
///
/// Query yang lebih panjang dari tree tidak pernah cocok. `*` cocok dengan
/// segmen apa pun. Tidak ada normalisasi case di sini.
pub fn match_segments<S, Q>(tree: &[S], query: &[Q]) -> bool
where
    S: AsRef<str>,
    Q: AsRef<str>,
{
    if query.len() > tree.len() {
        return false;
    }

    tree.iter().zip(query).all(|(t, q)| {
        let q = q.as_ref();
        q == WILDCARD || t.as_ref() == q
    })
}

impl fmt::Display for LTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LTree {
    fn from(value: &str) -> Self {
        Self(value.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lowercases() {
        let tree = LTree::new(["Org", "Team", "API"]);
        assert_eq!(tree.as_str(), "org.team.api");
        assert_eq!(tree.to_string(), "org.team.api");
        assert_eq!(tree.segments(), vec!["org", "team", "api"]);
    }

    #[test]
    fn test_prefix_postfix() {
        let tree = LTree::new(["team"]);

        assert_eq!(tree.prefix(["Org"]).as_str(), "org.team");
        assert_eq!(tree.postfix(["svc", "db"]).as_str(), "team.svc.db");
        assert_eq!(tree.as_str(), "team");
    }

    #[test]
    fn test_matches() {
        let tree = LTree::new(["a", "b"]);

        assert!(tree.matches("a.b"));
        assert!(tree.matches("A.*"));
        assert!(tree.matches("*.b"));
        assert!(tree.matches("a"));
        assert!(!tree.matches("a.c"));
        assert!(!tree.matches("a.b.c"));
    }

    #[test]
    fn test_empty_tree_matches_only_wildcard() {
        let tree = LTree::default();

        assert!(tree.matches("*"));
        assert!(!tree.matches("a"));
        assert!(!tree.matches(""));
    }

    #[test]
    fn test_match_segments() {
        assert!(match_segments(&["x", "y", "z"], &["x", "*"]));
        assert!(!match_segments(&["x"], &["x", "y"]));
        assert!(match_segments::<&str, &str>(&["x"], &[]));
    }

    #[test]
    fn test_serde_transparent() {
        let tree = LTree::new(["a", "b"]);
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, "\"a.b\"");

        let back: LTree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
