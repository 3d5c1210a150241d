//! Parsing of dotted paths into segments.
//!
//! Segments are separated by [`SEPARATOR`]. Every other character,
//! backslashes included, belongs to the segment it appears in.

use std::fmt;

use crate::error::{PathError, Result};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// A parsed dotted path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parse a path leniently.
    ///
    /// The empty string yields a path with no segments. Empty segments are
    /// kept as empty keys.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::default();
        }
        Self {
            segments: path.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Parse a path, rejecting empty paths and empty segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use mrec_path::Path;
    ///
    /// assert_eq!(Path::try_parse("a.b").unwrap().len(), 2);
    /// assert!(Path::try_parse("").is_err());
    /// assert!(Path::try_parse("a..b").is_err());
    /// ```
    pub fn try_parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(PathError::Empty);
        }
        let Self { segments } = Self::parse(path);
        if let Some(index) = segments.iter().position(String::is_empty) {
            return Err(PathError::EmptySegment {
                path: path.to_string(),
                index,
            });
        }
        Ok(Self { segments })
    }

    /// Build a path from already-split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The segments of this path, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into parent segments and the leaf segment.
    pub fn split_leaf(&self) -> Option<(&[String], &str)> {
        let (leaf, parents) = self.segments.split_last()?;
        Some((parents, leaf.as_str()))
    }

    /// Append a segment, returning the extended path.
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }
}

/// Segments are joined with [`SEPARATOR`] as they are. A segment that itself
/// contains the separator does not survive a re-parse.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<&String> for Path {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_path() {
        let path = Path::parse("a.b.c");
        assert_eq!(path.segments(), &["a", "b", "c"]);
    }

    #[test]
    fn empty_string_has_no_segments() {
        assert!(Path::parse("").is_empty());
    }

    #[test]
    fn lenient_parse_keeps_empty_segments() {
        let path = Path::parse("a..b");
        assert_eq!(path.segments(), &["a", "", "b"]);
    }

    #[test]
    fn backslash_is_an_ordinary_character() {
        let path = Path::parse(r"C:\dir.a\.b");
        assert_eq!(path.segments(), &[r"C:\dir", r"a\", "b"]);
        assert_eq!(path.to_string(), r"C:\dir.a\.b");
    }

    #[test]
    fn display_joins_segments() {
        let path = Path::from_segments(["server", "port"]);
        assert_eq!(path.to_string(), "server.port");
        assert_eq!(Path::parse(&path.to_string()), path);
    }

    #[test]
    fn strict_parse_rejects_empty() {
        assert_eq!(Path::try_parse(""), Err(PathError::Empty));
    }

    #[test]
    fn strict_parse_reports_empty_segment_index() {
        match Path::try_parse("a.b.") {
            Err(PathError::EmptySegment { index, .. }) => assert_eq!(index, 2),
            other => panic!("expected EmptySegment, got {:?}", other),
        }
    }

    #[test]
    fn strict_parse_accepts_trailing_backslash() {
        let path = Path::try_parse(r"a\").unwrap();
        assert_eq!(path.segments(), &[r"a\"]);
    }

    #[test]
    fn split_leaf_separates_parent() {
        let path = Path::parse("a.b.c");
        let (parents, leaf) = path.split_leaf().unwrap();
        assert_eq!(parents, &["a", "b"]);
        assert_eq!(leaf, "c");
        assert!(Path::parse("").split_leaf().is_none());
    }

    #[test]
    fn join_appends_segment() {
        let path = Path::parse("a").join("b.c");
        assert_eq!(path.segments(), &["a", "b.c"]);
    }
}
