use std::path::Path;

/// The identity of a language, as registered with a hosting editor.
///
/// The `name` is a stable key: editors persist settings and select style sheets by it, so
/// changing it breaks existing configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub name: &'static str,

    /// File extensions, without the leading dot, of documents in this language.
    pub file_extensions: &'static [&'static str],

    pub line_comment: &'static str,
    pub block_comment: (&'static str, &'static str),

    /// Characters, besides alphanumerics, that are part of a word.
    pub word_characters: &'static str,

    /// Sequences that separate words when completing member names, `SinOsc.` for example.
    pub auto_completion_word_separators: &'static [&'static str],
}

pub const CHUCK: LanguageDescriptor = LanguageDescriptor {
    name: "ChucK",
    file_extensions: &["ck"],
    line_comment: "//",
    block_comment: ("/*", "*/"),
    word_characters: "_",
    auto_completion_word_separators: &[".", "::"],
};

impl LanguageDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True if the file at `path` should be opened with this language.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.file_extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
    }
}
