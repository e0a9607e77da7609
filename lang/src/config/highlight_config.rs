use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::toolchain::lexer::{LanguageDescriptor, Style};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color '{0}', expected the form #rrggbb")]
    InvalidColor(String),

    #[error("unknown style '{style}' configured for language '{language}'")]
    UnknownStyle { language: String, style: String },
}

/// A 24-bit RGB color, written `#rrggbb` in configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Color, ConfigError> {
        // from_str_radix alone would accept a sign in front of each channel.
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()));
        let Some(hex) = hex else {
            return Err(ConfigError::InvalidColor(s));
        };
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Color { r, g, b }),
            _ => Err(ConfigError::InvalidColor(s)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The fully resolved look of one style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleSettings {
    pub foreground: Color,
    pub background: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

/// The configured changes to one style. Unset fields keep the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleOverride {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

impl StyleOverride {
    fn apply(&self, base: StyleSettings) -> StyleSettings {
        StyleSettings {
            foreground: self.foreground.unwrap_or(base.foreground),
            background: self.background.or(base.background),
            bold: self.bold.unwrap_or(base.bold),
            italic: self.italic.unwrap_or(base.italic),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageConfig {
    /// Overrides keyed by style name, see [Style::name].
    #[serde(default)]
    pub styles: BTreeMap<String, StyleOverride>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HighlightConfig {
    /// Language settings keyed by language name, see [LanguageDescriptor::name].
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageConfig>,
}

impl HighlightConfig {
    pub fn from_toml_str(s: &str) -> Result<HighlightConfig, ConfigError> {
        let config: HighlightConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<HighlightConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = HighlightConfig::from_toml_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            languages = config.languages.len(),
            "loaded highlight configuration"
        );
        Ok(config)
    }

    /// The settings to render `style` with in documents of `language`.
    pub fn style(&self, language: &LanguageDescriptor, style: Style) -> StyleSettings {
        let base = default_style(style);
        self.languages
            .get(language.name())
            .and_then(|l| l.styles.get(style.name()))
            .map_or(base, |o| o.apply(base))
    }

    // Style names are only checked here, languages this build doesn't know are left alone.
    fn validate(&self) -> Result<(), ConfigError> {
        for (language, config) in &self.languages {
            if let Some(style) = config.styles.keys().find(|s| Style::from_name(s).is_none()) {
                return Err(ConfigError::UnknownStyle {
                    language: language.clone(),
                    style: style.clone(),
                });
            }
        }
        Ok(())
    }
}

/// The built-in look of each style, following the classic Java/C++ editor palette.
pub fn default_style(style: Style) -> StyleSettings {
    let plain =
        |foreground| StyleSettings { foreground, background: None, bold: false, italic: false };
    let bold =
        |foreground| StyleSettings { foreground, background: None, bold: true, italic: false };
    match style {
        Style::Default | Style::Whitespace => plain(Color::rgb(0x80, 0x80, 0x80)),
        Style::Comment | Style::LineComment => plain(Color::rgb(0x00, 0x7f, 0x00)),
        Style::DocComment => plain(Color::rgb(0x3f, 0x70, 0x3f)),
        Style::DocCommentKeyword => bold(Color::rgb(0x30, 0x60, 0xa0)),
        Style::Number => plain(Color::rgb(0x00, 0x7f, 0x7f)),
        Style::Keyword => bold(Color::rgb(0x00, 0x00, 0x7f)),
        Style::PrimitiveType => plain(Color::rgb(0x00, 0x00, 0xff)),
        Style::BuiltinClass => plain(Color::rgb(0x80, 0x40, 0x00)),
        Style::String | Style::Character => plain(Color::rgb(0x7f, 0x00, 0x7f)),
        Style::UnterminatedString => StyleSettings {
            foreground: Color::rgb(0x00, 0x00, 0x00),
            background: Some(Color::rgb(0xe0, 0xc0, 0xe0)),
            bold: false,
            italic: false,
        },
        Style::Operator => bold(Color::rgb(0x00, 0x00, 0x00)),
        Style::Identifier => plain(Color::rgb(0x00, 0x00, 0x00)),
    }
}
