use crate::domain::value_objects::module_source::{ModuleSource, ModuleSourceError};

/// One retained line of the module config file.
///
/// The original line text is kept verbatim so a rewrite preserves the user's
/// formatting, including inline comments and indentation. The repository
/// identifier is derived on demand via [`ModuleEntry::source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    raw: String,
}

impl ModuleEntry {
    /// Create an entry from raw line text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The original line text, untrimmed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The repository identifier this line describes.
    pub fn source(&self) -> Result<ModuleSource, ModuleSourceError> {
        ModuleSource::new(&self.raw)
    }
}

/// The ordered list of modules held by the config file.
///
/// Source of truth is a line-oriented text file: one repository identifier
/// per line, `#` starts a comment. Lines that are empty once the comment
/// suffix and whitespace are stripped carry no entry and are dropped at
/// parse time; every other line is retained in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleList {
    entries: Vec<ModuleEntry>,
}

impl ModuleList {
    /// Create an empty module list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse config file contents into a module list.
    ///
    /// A line is retained exactly when it yields a valid [`ModuleSource`];
    /// retained lines keep their original text.
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .filter(|line| !ModuleSource::strip_line(line).is_empty())
            .map(ModuleEntry::new)
            .collect();
        Self { entries }
    }

    /// The retained entries, in file order.
    pub fn entries(&self) -> &[ModuleEntry] {
        &self.entries
    }

    /// Iterate over the retained entries.
    pub fn iter(&self) -> impl Iterator<Item = &ModuleEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry to the end of the list.
    ///
    /// No uniqueness is enforced; the install-time existence check is the
    /// only guard against duplicates.
    pub fn push(&mut self, entry: ModuleEntry) {
        self.entries.push(entry);
    }

    /// Render the list back to config file text.
    ///
    /// One raw line per entry, newline-terminated. Comment-only and blank
    /// lines were never entries and are not round-tripped.
    pub fn render(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(entry.raw());
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
# vim modules
https://github.com/tpope/vim-fugitive.git

  https://github.com/vim-airline/vim-airline # status line

   # commented out for now
git@github.com:altercation/vim-colors-solarized.git
";

    #[test]
    fn test_parse_drops_comments_and_blanks_in_order() {
        let list = ModuleList::parse(SAMPLE);

        let raw: Vec<&str> = list.iter().map(|e| e.raw()).collect();
        assert_eq!(
            raw,
            vec![
                "https://github.com/tpope/vim-fugitive.git",
                "  https://github.com/vim-airline/vim-airline # status line",
                "git@github.com:altercation/vim-colors-solarized.git",
            ]
        );
    }

    #[test]
    fn test_entries_resolve_to_sources() {
        let list = ModuleList::parse(SAMPLE);

        let sources: Vec<String> = list
            .iter()
            .map(|e| e.source().unwrap().as_str().to_string())
            .collect();
        assert_eq!(
            sources,
            vec![
                "https://github.com/tpope/vim-fugitive.git",
                "https://github.com/vim-airline/vim-airline",
                "git@github.com:altercation/vim-colors-solarized.git",
            ]
        );
    }

    #[test]
    fn test_parse_empty_contents() {
        let list = ModuleList::parse("");
        assert!(list.is_empty());

        let list = ModuleList::parse("# nothing here\n\n   \n");
        assert!(list.is_empty());
    }

    #[test]
    fn test_render_preserves_raw_lines() {
        let list = ModuleList::parse(SAMPLE);
        assert_eq!(
            list.render(),
            "https://github.com/tpope/vim-fugitive.git\n\
             \x20 https://github.com/vim-airline/vim-airline # status line\n\
             git@github.com:altercation/vim-colors-solarized.git\n"
        );
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(ModuleList::new().render(), "");
    }

    #[test]
    fn test_push_appends_at_end() {
        let mut list = ModuleList::parse("first\nsecond\n");
        list.push(ModuleEntry::new("third"));

        assert_eq!(list.len(), 3);
        assert_eq!(list.entries()[2].raw(), "third");
        assert_eq!(list.render(), "first\nsecond\nthird\n");
    }

    #[test]
    fn test_push_does_not_enforce_uniqueness() {
        let mut list = ModuleList::parse("repo\n");
        list.push(ModuleEntry::new("repo"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_reparse_round_trip() {
        let list = ModuleList::parse(SAMPLE);
        let reparsed = ModuleList::parse(&list.render());
        assert_eq!(list, reparsed);
    }
}
