//! Absolute document identifiers.

use std::fmt;
use std::sync::Arc;

/// The identity of a tracked document.
///
/// Wraps an absolute, already-normalized resource identifier such as
/// `file:///project/src/main.lar`. Cloning is cheap; the URI is used as the
/// key for per-document state throughout the server.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DocumentUri(Arc<str>);

impl DocumentUri {
    /// Creates a document URI from an absolute identifier string.
    ///
    /// The caller is expected to supply a normalized absolute URI; no
    /// normalization is performed here.
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    /// Returns the URI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path portion of the URI (everything after the
    /// `scheme://` prefix), or the whole URI when no scheme is present.
    pub fn path(&self) -> &str {
        match self.0.find("://") {
            Some(idx) => &self.0[idx + 3..],
            None => &self.0,
        }
    }

    /// Returns the lowercased extension of the final path segment, if any.
    ///
    /// A leading dot does not count as an extension separator, so
    /// `.hidden` has no extension while `module.LAR` yields `"lar"`.
    pub fn extension(&self) -> Option<String> {
        let file_name = self.path().rsplit('/').next()?;
        let dot = file_name.rfind('.')?;
        if dot == 0 || dot + 1 == file_name.len() {
            return None;
        }
        Some(file_name[dot + 1..].to_ascii_lowercase())
    }
}

impl fmt::Display for DocumentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_strips_scheme() {
        let uri = DocumentUri::new("file:///work/module.lar");
        assert_eq!(uri.path(), "/work/module.lar");
    }

    #[test]
    fn path_without_scheme() {
        let uri = DocumentUri::new("/work/module.lar");
        assert_eq!(uri.path(), "/work/module.lar");
    }

    #[test]
    fn extension_lowercased() {
        let uri = DocumentUri::new("file:///work/Module.LAR");
        assert_eq!(uri.extension().as_deref(), Some("lar"));
    }

    #[test]
    fn extension_absent() {
        assert_eq!(DocumentUri::new("file:///work/module").extension(), None);
        assert_eq!(DocumentUri::new("file:///work/.hidden").extension(), None);
        assert_eq!(DocumentUri::new("file:///work/trailing.").extension(), None);
    }

    #[test]
    fn cheap_clone_keeps_identity() {
        let uri = DocumentUri::new("file:///a.lar");
        let copy = uri.clone();
        assert_eq!(uri, copy);
        assert_eq!(copy.to_string(), "file:///a.lar");
    }
}
