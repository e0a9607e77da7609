#[cfg(test)]
mod tests {
    use crate::config::highlight_config::*;
    use crate::toolchain::lexer::{LanguageDescriptor, Style, CHUCK};

    #[test]
    fn color_parsing() {
        assert_eq!(Color::try_from("#00ff7F".to_string()).ok(), Some(Color::rgb(0, 0xff, 0x7f)));
        assert_eq!(Color::rgb(0x0a, 0xbc, 0xde).to_string(), "#0abcde");
        for bad in ["00ff7f", "#00ff7", "#00ff7f0", "#gg0000", "#ééé", ""] {
            assert!(
                matches!(Color::try_from(bad.to_string()), Err(ConfigError::InvalidColor(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn color_channels_are_unsigned() {
        for bad in ["#+1+2+3", "#-0-0-0", "#+f+f+f", "#+ff+ff"] {
            assert!(
                matches!(Color::try_from(bad.to_string()), Err(ConfigError::InvalidColor(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = HighlightConfig::from_toml_str("").unwrap();
        for style in Style::ALL {
            assert_eq!(config.style(&CHUCK, style), default_style(style));
        }
    }

    #[test]
    fn override_is_partial() {
        let config = HighlightConfig::from_toml_str(
            r##"
            [languages.ChucK.styles.keyword]
            foreground = "#112233"

            [languages.ChucK.styles.line-comment]
            italic = true
            background = "#ffffff"
            "##,
        )
        .unwrap();

        let keyword = config.style(&CHUCK, Style::Keyword);
        assert_eq!(keyword.foreground, Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(keyword.bold, default_style(Style::Keyword).bold);

        let comment = config.style(&CHUCK, Style::LineComment);
        assert_eq!(comment.foreground, default_style(Style::LineComment).foreground);
        assert!(comment.italic);
        assert_eq!(comment.background, Some(Color::rgb(0xff, 0xff, 0xff)));

        assert_eq!(config.style(&CHUCK, Style::Number), default_style(Style::Number));
    }

    #[test]
    fn overrides_are_per_language() {
        let config = HighlightConfig::from_toml_str(
            r##"
            [languages.Other.styles.keyword]
            bold = false
            "##,
        )
        .unwrap();
        assert_eq!(config.style(&CHUCK, Style::Keyword), default_style(Style::Keyword));

        let other = LanguageDescriptor { name: "Other", ..CHUCK };
        assert!(!config.style(&other, Style::Keyword).bold);
    }

    #[test]
    fn unknown_style_rejected() {
        let result = HighlightConfig::from_toml_str(
            r##"
            [languages.ChucK.styles.keywords]
            bold = true
            "##,
        );
        match result {
            Err(ConfigError::UnknownStyle { language, style }) => {
                assert_eq!(language, "ChucK");
                assert_eq!(style, "keywords");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn malformed_rejected() {
        assert!(matches!(
            HighlightConfig::from_toml_str("[languages.ChucK.styles.keyword]\nfg = \"#000000\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            HighlightConfig::from_toml_str(
                "[languages.ChucK.styles.keyword]\nforeground = \"red\""
            ),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            HighlightConfig::from_toml_str(
                "[languages.ChucK.styles.keyword]\nforeground = \"#+f+f+f\""
            ),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            HighlightConfig::from_toml_str("languages = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("cklex-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[languages.ChucK.styles.number]\nbold = true\n").unwrap();
        let config = HighlightConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(config.unwrap().style(&CHUCK, Style::Number).bold);
    }

    #[test]
    fn load_missing_file() {
        let path = std::env::temp_dir().join("cklex-config-does-not-exist.toml");
        assert!(matches!(HighlightConfig::load(&path), Err(ConfigError::Io { .. })));
    }
}
