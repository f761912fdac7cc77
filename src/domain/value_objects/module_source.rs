use std::fmt;
use thiserror::Error;

/// ModuleSource related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModuleSourceError {
    /// The line held no text once comment and whitespace were stripped.
    #[error("empty module source")]
    Empty,
}

/// A repository identifier as handed to `git clone`.
///
/// Built from one config line or one CLI argument: a `#`-led comment suffix
/// and surrounding whitespace are stripped first, and what remains must be
/// non-empty. No URL validation is attempted beyond that; git accepts URLs
/// and plain filesystem paths alike, so vimod does too.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleSource {
    source: String,
}

impl ModuleSource {
    /// Create a new ModuleSource from raw line text.
    pub fn new(raw: &str) -> Result<Self, ModuleSourceError> {
        let source = Self::strip_line(raw);
        if source.is_empty() {
            return Err(ModuleSourceError::Empty);
        }
        Ok(Self {
            source: source.to_string(),
        })
    }

    /// Strip a `#`-led comment suffix and surrounding whitespace.
    pub(crate) fn strip_line(raw: &str) -> &str {
        let without_comment = match raw.split_once('#') {
            Some((before, _)) => before,
            None => raw,
        };
        without_comment.trim()
    }

    /// The identifier passed through to the clone operation.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Directory name this module occupies under the bundle directory.
    ///
    /// The final path segment of the source, with a `.git` suffix removed:
    /// `https://host/owner/repo.git` and `git@host:owner/repo` both map to
    /// `repo`.
    pub fn bundle_name(&self) -> &str {
        let trimmed = self.source.trim_end_matches('/');
        let base = trimmed.rsplit('/').next().unwrap_or(trimmed);
        base.strip_suffix(".git").unwrap_or(base)
    }
}

impl fmt::Display for ModuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl TryFrom<&str> for ModuleSource {
    type Error = ModuleSourceError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        ModuleSource::new(raw)
    }
}

impl TryFrom<String> for ModuleSource {
    type Error = ModuleSourceError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        ModuleSource::new(&raw)
    }
}
