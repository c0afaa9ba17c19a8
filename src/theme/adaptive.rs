//! Color mode selection and OS detection.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Light => f.write_str("light"),
            ColorMode::Dark => f.write_str("dark"),
        }
    }
}

/// A requested mode: either fixed, or detected from the OS when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeChoice {
    #[default]
    Auto,
    Fixed(ColorMode),
}

impl ModeChoice {
    /// Resolves to a concrete mode, consulting the detector for `Auto`.
    pub fn resolve(self) -> ColorMode {
        match self {
            ModeChoice::Auto => detect_color_mode(),
            ModeChoice::Fixed(mode) => mode,
        }
    }
}

impl From<ColorMode> for ModeChoice {
    fn from(mode: ColorMode) -> Self {
        ModeChoice::Fixed(mode)
    }
}

impl FromStr for ModeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ModeChoice::Auto),
            "light" => Ok(ModeChoice::Fixed(ColorMode::Light)),
            "dark" => Ok(ModeChoice::Fixed(ColorMode::Dark)),
            other => Err(format!(
                "unknown color mode '{}' (expected auto, light or dark)",
                other
            )),
        }
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to resolve [`ModeChoice::Auto`].
///
/// Useful in tests, or to force a mode without touching call sites.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Runs the current detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let mode = (*detector)();
    tracing::debug!(%mode, "detected color mode");
    mode
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
