//! Editor style configuration.
//!
//! Styles are configured per language, keyed by the language descriptor name, so one file can
//! hold settings for several lexers:
//!
//! ```toml
//! [languages.ChucK.styles.keyword]
//! foreground = "#000080"
//! bold = true
//! ```
//!
//! Anything left unset falls back to the default settings of the style.

pub mod highlight_config;

pub use highlight_config::{
    default_style, Color, ConfigError, HighlightConfig, LanguageConfig, StyleOverride,
    StyleSettings,
};

#[cfg(test)]
mod highlight_config_unittests;
