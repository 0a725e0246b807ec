//! Directory, file and segment breakdown of a URI path.

/// Information about a URI path.
///
/// # Examples
///
/// ```
/// use parsed_uri::PathInfo;
///
/// let info = PathInfo::from_path("/path/to/script.php");
/// assert_eq!(info.dirname(), "/path/to");
/// assert_eq!(info.basename(), "script.php");
/// assert_eq!(info.extension(), Some("php"));
/// assert_eq!(info.filename(), "script");
/// assert_eq!(info.segments(), ["path", "to", "script.php"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathInfo {
    dirname: String,
    basename: String,
    extension: Option<String>,
    filename: String,
    segments: Vec<String>,
}

impl PathInfo {
    /// Breaks a path into its parts.
    ///
    /// Trailing slashes are ignored when finding the base name. A path
    /// without any `/` has the directory `"."`; the empty path has an empty
    /// directory.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let trimmed = path.trim_end_matches('/');
        let (dirname, basename) = match trimmed.rfind('/') {
            Some(idx) => {
                let dir = trimmed[..idx].trim_end_matches('/');
                (if dir.is_empty() { "/" } else { dir }, &trimmed[idx + 1..])
            }
            None if path.starts_with('/') => ("/", ""),
            None if path.is_empty() => ("", ""),
            None => (".", trimmed),
        };

        let (filename, extension) = match basename.rfind('.') {
            Some(idx) => (&basename[..idx], Some(&basename[idx + 1..])),
            None => (basename, None),
        };

        Self {
            dirname: dirname.to_string(),
            basename: basename.to_string(),
            extension: extension.map(str::to_string),
            filename: filename.to_string(),
            segments,
        }
    }

    /// Returns the directory part.
    #[must_use]
    pub fn dirname(&self) -> &str {
        &self.dirname
    }

    /// Returns the last path component.
    #[must_use]
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// Returns the text after the last `.` of the base name, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Returns the base name without its extension.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the non-empty segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of non-empty segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}
