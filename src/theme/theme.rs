//! Theme: the named terminal styles used by the page template.

use console::Style;

use super::palette::{Palette, Shade};
use crate::style::{Region, StyleMap, StyleValidationError, StyleValue, Styles};
use crate::util::rgb_to_ansi256;

/// A named collection of styles used when rendering the page template.
///
/// # Example
///
/// ```rust
/// use betboard::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     .add("accent", Style::new().cyan().bold())
///     .add("page.title", "accent");
/// assert!(theme.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    pub(crate) styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            styles: Styles::new(),
        }
    }

    /// Builds the page theme from a palette and the grid's region overrides.
    ///
    /// Body cell styles layer the region on top of the body background, so
    /// accent text keeps the body's background color.
    pub fn for_page(palette: &Palette, overrides: &StyleMap) -> Self {
        let body = overrides.get(Region::Body);
        let body_style = |region: Region| -> Style { body.merge(overrides.get(region)).to_style() };

        Theme::new()
            .add(
                "page.title",
                Style::new()
                    .color256(rgb_to_ansi256(palette.grey.shade(Shade::S100).to_tuple()))
                    .bold(),
            )
            .add(
                "page.subtitle",
                Style::new().color256(rgb_to_ansi256(
                    palette.green_accent.shade(Shade::S400).to_tuple(),
                )),
            )
            .add("grid.toolbar", overrides.get(Region::ToolbarButton).to_style())
            .add("grid.border", Style::new().dim())
            .add("grid.header", overrides.get(Region::ColumnHeaders).to_style().bold())
            .add("grid.body", body.to_style())
            .add("grid.cell", body_style(Region::Cell))
            .add(
                "grid.name-cell",
                body.merge(overrides.get(Region::Cell))
                    .merge(overrides.get(Region::NameCell))
                    .to_style(),
            )
            .add("grid.checkbox", body_style(Region::Checkbox))
            .add("grid.overlay", "grid.body")
            .add("grid.footer", overrides.get(Region::Footer).to_style())
    }

    /// Adds a named style or alias, returning the updated theme for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles = self.styles.add(name, value);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Checks that every alias in the theme resolves.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        self.styles.validate()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::grid_overrides;
    use crate::theme::{palette_for, ColorMode};

    #[test]
    fn test_page_theme_is_valid() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            let palette = palette_for(mode);
            let theme = Theme::for_page(&palette, &grid_overrides(&palette));
            assert!(theme.validate().is_ok());
        }
    }

    #[test]
    fn test_page_theme_has_grid_styles() {
        let palette = palette_for(ColorMode::Dark);
        let theme = Theme::for_page(&palette, &grid_overrides(&palette));
        for name in [
            "page.title",
            "page.subtitle",
            "grid.toolbar",
            "grid.header",
            "grid.cell",
            "grid.name-cell",
            "grid.checkbox",
            "grid.overlay",
            "grid.footer",
        ] {
            assert!(theme.styles().resolve(name).is_some(), "missing {}", name);
        }
    }

    #[test]
    fn test_name_cell_keeps_body_background() {
        let palette = palette_for(ColorMode::Dark);
        let theme = Theme::for_page(&palette, &grid_overrides(&palette));
        let styled = theme.styles().apply_with_mode("grid.name-cell", "AppX", true);
        let body_bg = rgb_to_ansi256(palette.primary.shade(Shade::S400).to_tuple());
        let accent = rgb_to_ansi256(palette.green_accent.shade(Shade::S300).to_tuple());
        assert!(styled.contains(&format!("48;5;{}", body_bg)));
        assert!(styled.contains(&format!("38;5;{}", accent)));
    }

    #[test]
    fn test_theme_validate_invalid() {
        let theme = Theme::new().add("orphan", "missing");
        assert!(theme.validate().is_err());
    }
}
