//! Theme values resolved once at startup
//!
//! On the web these come from CSS custom properties on the document root
//! (`--ball-radius`, `--bat-color`, ...). Anything missing or unparsable falls
//! back to the built-in default so layout never sees NaN.

use serde::{Deserialize, Serialize};

/// A CSS color string (`"#ff3c78"`, `"white"`, `"rgb(0, 0, 0)"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(css: &str) -> Self {
        Self::new(css)
    }
}

/// Resolved style and dimension parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub ball_radius: f32,
    pub ball_color: Color,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_color: Color,

    pub brick_padding: f32,
    pub brick_height: f32,
    pub brick_color: Color,
    /// Canvas default stroke is black
    pub brick_outline_color: Color,

    pub score_color: Color,
    pub game_over_color: Color,
    pub win_color: Color,
    /// CSS font size, e.g. `"48px"`
    pub message_font_size: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            ball_radius: 10.0,
            ball_color: Color::new("#ffe600"),

            paddle_width: 100.0,
            paddle_height: 12.0,
            paddle_color: Color::new("#00e5ff"),

            brick_padding: 10.0,
            brick_height: 20.0,
            brick_color: Color::new("#ff3c78"),
            brick_outline_color: Color::new("black"),

            score_color: Color::new("white"),
            game_over_color: Color::new("red"),
            win_color: Color::new("lime"),
            message_font_size: "48px".to_string(),
        }
    }
}

impl Style {
    /// Resolve a style from named CSS custom properties over the defaults.
    ///
    /// `lookup` receives names like `"--ball-radius"` and returns the raw
    /// property value, if any.
    pub fn from_properties<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_properties(lookup)
    }

    /// Like `from_properties`, with `self` supplying every fallback
    pub fn with_properties<F>(&self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = self;
        let number = |name: &str, fallback: f32| -> f32 {
            match lookup(name) {
                Some(raw) => match parse_int_prefix(&raw) {
                    Some(v) => v as f32,
                    None => {
                        log::warn!("Style property {name} = {raw:?} is not a number, using {fallback}");
                        fallback
                    }
                },
                None => fallback,
            }
        };
        let text = |name: &str, fallback: &str| -> String {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };
        let color = |name: &str, fallback: &Color| Color(text(name, fallback.as_str()));

        Self {
            ball_radius: number("--ball-radius", base.ball_radius),
            ball_color: color("--ball-color", &base.ball_color),
            paddle_width: number("--bat-width", base.paddle_width),
            paddle_height: number("--bat-height", base.paddle_height),
            paddle_color: color("--bat-color", &base.paddle_color),
            brick_padding: number("--brick-padding", base.brick_padding),
            brick_height: number("--brick-height", base.brick_height),
            brick_color: color("--brick-color", &base.brick_color),
            brick_outline_color: base.brick_outline_color.clone(),
            score_color: color("--score-color", &base.score_color),
            game_over_color: color("--game-over-color", &base.game_over_color),
            win_color: color("--win-color", &base.win_color),
            message_font_size: text("--message-font-size", &base.message_font_size),
        }
    }

    /// Font used for the centered end-of-game message
    pub fn message_font(&self) -> String {
        format!("{} {}", self.message_font_size, crate::consts::MESSAGE_FONT_FAMILY)
    }
}

/// Parse the leading integer of a string (`" 12px"` -> 12, `"px"` -> None)
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|v| v * sign)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("12"), Some(12));
        assert_eq!(parse_int_prefix(" 12px"), Some(12));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("7.9"), Some(7));
        assert_eq!(parse_int_prefix("px"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn test_from_properties_reads_css_vars() {
        let props: HashMap<&str, &str> = [
            ("--ball-radius", " 8"),
            ("--ball-color", "  #fff "),
            ("--bat-width", "120px"),
            ("--bat-height", "15"),
            ("--brick-padding", "6"),
            ("--message-font-size", "60px"),
        ]
        .into_iter()
        .collect();

        let style = Style::from_properties(|name| props.get(name).map(|v| v.to_string()));
        assert_eq!(style.ball_radius, 8.0);
        assert_eq!(style.ball_color, Color::new("#fff"));
        assert_eq!(style.paddle_width, 120.0);
        assert_eq!(style.paddle_height, 15.0);
        assert_eq!(style.brick_padding, 6.0);
        assert_eq!(style.message_font(), "60px Arial");
        // Untouched properties keep defaults
        assert_eq!(style.brick_height, Style::default().brick_height);
        assert_eq!(style.win_color, Style::default().win_color);
    }

    #[test]
    fn test_invalid_number_falls_back() {
        let style = Style::from_properties(|name| {
            (name == "--ball-radius").then(|| "large".to_string())
        });
        assert_eq!(style.ball_radius, Style::default().ball_radius);
        assert!(!style.ball_radius.is_nan());
    }

    #[test]
    fn test_empty_color_falls_back() {
        let style = Style::from_properties(|name| (name == "--bat-color").then(|| "   ".to_string()));
        assert_eq!(style.paddle_color, Style::default().paddle_color);
    }

    #[test]
    fn test_with_properties_keeps_base() {
        let base = Style {
            paddle_width: 150.0,
            win_color: Color::new("gold"),
            ..Style::default()
        };
        let style = base.with_properties(|name| (name == "--ball-radius").then(|| "4".to_string()));
        assert_eq!(style.ball_radius, 4.0);
        assert_eq!(style.paddle_width, 150.0);
        assert_eq!(style.win_color, Color::new("gold"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let style: Style = serde_json::from_str(r#"{"ball_radius": 6.0}"#).unwrap();
        assert_eq!(style.ball_radius, 6.0);
        assert_eq!(style.paddle_width, Style::default().paddle_width);
    }
}
