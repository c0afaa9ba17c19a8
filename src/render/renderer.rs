//! Pre-compiled template renderer.

use minijinja::Environment;
use serde::Serialize;

use super::filters::register_filters;
use crate::error::Result;
use crate::output::OutputMode;
use crate::theme::Theme;

/// A renderer with pre-registered templates and a theme bound to its filters.
///
/// # Example
///
/// ```rust
/// use betboard::{OutputMode, Renderer, Theme};
/// use console::Style;
/// use serde::Serialize;
///
/// let theme = Theme::new().add("page.title", Style::new().bold());
/// let mut renderer = Renderer::with_output(theme, OutputMode::Text).unwrap();
/// renderer
///     .add_template("title", r#"{{ title | style("page.title") }}"#)
///     .unwrap();
///
/// #[derive(Serialize)]
/// struct Header { title: String }
///
/// let out = renderer.render("title", &Header { title: "Bets Made".into() }).unwrap();
/// assert_eq!(out, "Bets Made");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer that styles according to terminal support.
    ///
    /// # Errors
    ///
    /// Returns an error if any style aliases are invalid (dangling or cyclic).
    pub fn new(theme: Theme) -> Result<Self> {
        Self::with_output(theme, OutputMode::Auto)
    }

    /// Creates a renderer with an explicit output mode.
    ///
    /// # Errors
    ///
    /// Returns an error if any style aliases are invalid (dangling or cyclic).
    pub fn with_output(theme: Theme, mode: OutputMode) -> Result<Self> {
        theme.validate()?;

        let mut env = Environment::new();
        register_filters(&mut env, theme, mode);
        Ok(Self { env })
    }

    /// Registers a named template, compiling it immediately.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}
