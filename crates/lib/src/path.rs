//! Path types for addressing locations inside nested mappings.
//!
//! A path is an ordered sequence of string segments; each segment names one
//! key to descend through. The [`Path`]/[`PathBuf`] pair follows the same
//! borrowed/owned split as `std::path::Path`/`PathBuf`: decomposing a path
//! with [`Path::tail`] borrows the remaining segments instead of copying them.
//!
//! # Core Types
//!
//! - [`Path`] - An unsized borrowed path type (always behind a reference)
//! - [`PathBuf`] - An owned path type that can be constructed and extended
//!
//! # Usage
//!
//! ```rust
//! use jsonnode::{PathBuf, path};
//! use std::str::FromStr;
//!
//! // Segment by segment (infallible)
//! let a = PathBuf::new().push("user").push("profile").push("name");
//!
//! // Dot-separated text
//! let b = PathBuf::from_str("user.profile.name").unwrap();
//!
//! // Macro form, mixing literals and runtime values
//! let field = "name";
//! let c = path!("user", "profile", field);
//!
//! assert_eq!(a, b);
//! assert_eq!(b, c);
//! assert_eq!(c.head().unwrap(), "user");
//! assert_eq!(c.tail().unwrap().len(), 2);
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use thiserror::Error;

/// Error type for path construction and decomposition failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// `head()` or `tail()` was called on a path with no segments.
    #[error("path has no segments")]
    Empty,

    /// A segment was empty where strict construction was requested.
    #[error("segment {index} is empty")]
    EmptySegment { index: usize },
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// An owned path of string segments.
///
/// Empty segments are dropped on every construction route, so a `PathBuf`
/// only ever holds non-empty segments. Use [`PathBuf::try_from_segments`]
/// to reject such input instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathBuf {
    segments: Vec<String>,
}

/// A borrowed path of string segments.
///
/// `Path` is the borrowed counterpart to [`PathBuf`], similar to how `&str`
/// relates to `String`. This type is unsized and must always be used behind
/// a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    segments: [String],
}

impl PathBuf {
    /// Creates a new empty path.
    ///
    /// The empty path denotes the root itself: no descent.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Creates a path from a sequence of segments, dropping empty ones.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(Into::into)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Creates a path from a sequence of segments, failing on the first empty one.
    ///
    /// # Errors
    /// Returns [`PathError::EmptySegment`] with the offending position.
    pub fn try_from_segments<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .map(Into::into)
            .enumerate()
            .map(|(index, s)| {
                if s.is_empty() {
                    Err(PathError::EmptySegment { index })
                } else {
                    Ok(s)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    /// Appends one segment and returns the extended path.
    ///
    /// The segment is taken literally: dots are not split. An empty segment
    /// is ignored.
    ///
    /// ```rust
    /// # use jsonnode::PathBuf;
    /// let path = PathBuf::new().push("user").push("").push("a.b");
    /// assert_eq!(path.as_list(), vec!["user".to_string(), "a.b".to_string()]);
    /// ```
    pub fn push(mut self, segment: impl AsRef<str>) -> Self {
        let segment = segment.as_ref();
        if !segment.is_empty() {
            self.segments.push(segment.to_string());
        }
        self
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: impl AsRef<Path>) -> Self {
        self.segments.extend(other.as_ref().segments.iter().cloned());
        self
    }

    /// Consumes the path and returns its segments.
    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }

    /// Returns a borrowed view of this path.
    pub fn as_path(&self) -> &Path {
        Path::from_slice(&self.segments)
    }
}

impl Path {
    /// Views a slice of segments as a path, without normalising.
    pub(crate) fn from_slice(segments: &[String]) -> &Path {
        // SAFETY: Path is repr(transparent) over [String]
        unsafe { &*(segments as *const [String] as *const Path) }
    }

    /// Returns the empty path.
    pub fn empty() -> &'static Path {
        const NO_SEGMENTS: &[String] = &[];
        Path::from_slice(NO_SEGMENTS)
    }

    /// Returns the first segment.
    ///
    /// # Errors
    /// Returns [`PathError::Empty`] if the path has no segments.
    pub fn head(&self) -> Result<&str, PathError> {
        self.segments
            .first()
            .map(String::as_str)
            .ok_or(PathError::Empty)
    }

    /// Returns every segment except the first.
    ///
    /// On a single-segment path this is the empty path.
    ///
    /// # Errors
    /// Returns [`PathError::Empty`] if the path has no segments.
    pub fn tail(&self) -> Result<&Path, PathError> {
        match self.segments.split_first() {
            Some((_, rest)) => Ok(Path::from_slice(rest)),
            None => Err(PathError::Empty),
        }
    }

    /// Splits the path into its head and tail, or `None` when empty.
    pub fn split_first(&self) -> Option<(&str, &Path)> {
        self.segments
            .split_first()
            .map(|(head, rest)| (head.as_str(), Path::from_slice(rest)))
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments as string slices.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the segments as an ordered list.
    pub fn as_list(&self) -> Vec<String> {
        self.segments.to_vec()
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            segments: self.segments.to_vec(),
        }
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.as_path()
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.as_path()
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl PartialEq<Path> for PathBuf {
    fn eq(&self, other: &Path) -> bool {
        self.as_path() == other
    }
}

impl PartialEq<PathBuf> for Path {
    fn eq(&self, other: &PathBuf) -> bool {
        self == other.as_path()
    }
}

impl PartialEq<PathBuf> for &Path {
    fn eq(&self, other: &PathBuf) -> bool {
        *self == other.as_path()
    }
}

/// Parses dot-separated text; `"a..b."` normalises to `["a", "b"]`.
impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_segments(s.split('.')))
    }
}

impl From<Vec<String>> for PathBuf {
    fn from(segments: Vec<String>) -> Self {
        Self::from_segments(segments)
    }
}

impl From<&[&str]> for PathBuf {
    fn from(segments: &[&str]) -> Self {
        Self::from_segments(segments.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for PathBuf {
    fn from(segments: [&str; N]) -> Self {
        Self::from_segments(segments)
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl<S: Into<String>> FromIterator<S> for PathBuf {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_segments(iter)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_path(), f)
    }
}

/// Constructs a [`PathBuf`] from segments.
///
/// Each argument is one literal segment; dots inside an argument are kept.
///
/// # Syntax
///
/// - `path!()` - Empty path
/// - `path!("user", "profile", "name")` - Literal segments
/// - `path!(base, "profile")` - Mix runtime values and literals
///
/// # Examples
///
/// ```rust
/// # use jsonnode::path;
/// let empty = path!();
/// assert!(empty.is_empty());
///
/// let base = String::from("user");
/// let path = path!(base, "profile", "name",);
/// assert_eq!(path.len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::PathBuf::new()
    };

    ($($segment:expr),+ $(,)?) => {
        $crate::PathBuf::new()$(.push($segment))+
    };
}
