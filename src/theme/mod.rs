//! Theme system: color modes, palettes and the page's named styles.
//!
//! - [`ColorMode`] and [`ModeChoice`]: light/dark selection with OS detection
//! - [`Palette`] and [`palette_for`]: the color tokens for a mode
//! - [`Theme`]: named terminal styles built from a palette
//!
//! The palette is a pure function of the mode and is passed explicitly into
//! rendering; the only global is the overridable mode detector.

mod adaptive;
mod palette;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_theme_detector, ColorMode, ModeChoice};
pub use palette::{palette_for, ColorScale, Palette, Rgb, Shade};
pub use theme::Theme;
