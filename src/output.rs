//! Output mode selection.

use std::fmt;
use std::str::FromStr;

/// How a rendered page is emitted.
///
/// The styled modes (`Auto`, `Term`, `Text`, `TermDebug`) go through the page
/// template. The structured modes (`Json`, `Yaml`, `Csv`) skip the template and
/// serialize data directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// ANSI styling when the terminal supports it.
    #[default]
    Auto,
    /// Always emit ANSI styling.
    Term,
    /// Plain text, no styling.
    Text,
    /// Style names as bracket tags, for inspecting which style went where.
    TermDebug,
    /// The page view model as JSON.
    Json,
    /// The page view model as YAML.
    Yaml,
    /// The grid export: labeled header line plus one line per record.
    Csv,
}

impl OutputMode {
    /// Whether ANSI codes should be emitted.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            _ => false,
        }
    }

    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::TermDebug)
    }

    /// Whether this mode bypasses the template and serializes data.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::Yaml | OutputMode::Csv)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::TermDebug => "term-debug",
            OutputMode::Json => "json",
            OutputMode::Yaml => "yaml",
            OutputMode::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown output mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output mode '{0}' (expected auto, term, text, term-debug, json, yaml or csv)")]
pub struct UnknownOutputMode(pub String);

impl FromStr for OutputMode {
    type Err = UnknownOutputMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "term-debug" => Ok(OutputMode::TermDebug),
            "json" => Ok(OutputMode::Json),
            "yaml" => Ok(OutputMode::Yaml),
            "csv" => Ok(OutputMode::Csv),
            other => Err(UnknownOutputMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for mode in [
            OutputMode::Auto,
            OutputMode::Term,
            OutputMode::Text,
            OutputMode::TermDebug,
            OutputMode::Json,
            OutputMode::Yaml,
            OutputMode::Csv,
        ] {
            assert_eq!(mode.as_str().parse::<OutputMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "xml".parse::<OutputMode>().unwrap_err();
        assert_eq!(err, UnknownOutputMode("xml".into()));
        assert_eq!(
            err.to_string(),
            "unknown output mode 'xml' (expected auto, term, text, term-debug, json, yaml or csv)"
        );

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_color_flags() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::TermDebug.should_use_color());
        assert!(OutputMode::TermDebug.is_debug());
        assert!(OutputMode::Csv.is_structured());
        assert!(!OutputMode::Term.is_structured());
    }
}
