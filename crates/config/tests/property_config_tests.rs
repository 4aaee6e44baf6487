//! Property-based tests for configuration values.
//!
//! Test coverage:
//! - Theme names parse regardless of case, separators, and padding
//! - `FallbackVisuals::merge` always prefers the overlay
//! - Text validation accepts exactly the non-blank texts within the length limit
//! - Config files survive a write/read cycle

use proptest::prelude::*;
use tempfile::TempDir;

use query_handler_config::constants::MAX_TEXT_LEN;
use query_handler_config::{
    ColorTheme, ConfigFile, FallbackVisuals, read_config_file, write_config_file,
};

fn theme_strategy() -> impl Strategy<Value = ColorTheme> {
    proptest::sample::select(ColorTheme::ALL.to_vec())
}

fn text_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z][A-Za-z .!]{0,30}")
}

fn visuals_strategy() -> impl Strategy<Value = FallbackVisuals> {
    (text_strategy(), text_strategy(), text_strategy(), text_strategy()).prop_map(
        |(loading, error, empty, title)| FallbackVisuals {
            loading,
            error,
            empty,
            title,
        },
    )
}

/// Render a theme name with random case, separator, and padding.
fn spelled(theme: ColorTheme, upper: bool, separator: char, pad: usize) -> String {
    let snake = serde_json::to_value(theme)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    let name = snake.replace('_', &separator.to_string());
    let name = if upper { name.to_uppercase() } else { name };
    format!("{}{}{}", " ".repeat(pad), name, " ".repeat(pad))
}

proptest! {
    #[test]
    fn prop_theme_names_parse(
        theme in theme_strategy(),
        upper in any::<bool>(),
        separator in prop_oneof![Just('_'), Just('-'), Just(' ')],
        pad in 0usize..3,
    ) {
        let text = spelled(theme, upper, separator, pad);
        prop_assert_eq!(text.parse::<ColorTheme>().unwrap(), theme);
    }

    #[test]
    fn prop_merge_prefers_overlay(base in visuals_strategy(), overlay in visuals_strategy()) {
        let merged = base.clone().merge(overlay.clone());
        prop_assert_eq!(merged.loading, overlay.loading.or(base.loading));
        prop_assert_eq!(merged.error, overlay.error.or(base.error));
        prop_assert_eq!(merged.empty, overlay.empty.or(base.empty));
        prop_assert_eq!(merged.title, overlay.title.or(base.title));
    }

    #[test]
    fn prop_validate_length_limit(len in 1usize..(MAX_TEXT_LEN * 2)) {
        let visuals = FallbackVisuals {
            empty: Some("x".repeat(len)),
            ..Default::default()
        };
        prop_assert_eq!(visuals.validate().is_ok(), len <= MAX_TEXT_LEN);
    }

    #[test]
    fn prop_config_file_write_read(
        theme in proptest::option::of(theme_strategy()),
        spinner in proptest::option::of(any::<bool>()),
        visuals in visuals_strategy(),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let file = ConfigFile { theme, spinner, visuals };

        write_config_file(&path, &file).unwrap();
        prop_assert_eq!(read_config_file(&path).unwrap(), file);
    }
}
