//! Style validation errors.

/// A theme whose aliases do not resolve to concrete styles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleValidationError {
    /// An alias names a style the theme does not define.
    #[error("style '{from}' aliases non-existent style '{to}'")]
    UnresolvedAlias { from: String, to: String },

    /// Following aliases from a style leads back to it.
    #[error("cycle detected in style aliases: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputMode;
    use crate::render::Renderer;
    use crate::theme::Theme;
    use console::Style;

    #[test]
    fn test_overlay_without_body_is_unresolved() {
        // The page theme points the empty-grid overlay at the body style
        let theme = Theme::new().add("grid.overlay", "grid.body");
        let err = theme.validate().unwrap_err();

        assert_eq!(
            err,
            StyleValidationError::UnresolvedAlias {
                from: "grid.overlay".into(),
                to: "grid.body".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "style 'grid.overlay' aliases non-existent style 'grid.body'"
        );
    }

    #[test]
    fn test_overlay_alias_resolves_once_body_exists() {
        let theme = Theme::new()
            .add("grid.overlay", "grid.body")
            .add("grid.body", Style::new().on_blue());
        assert!(theme.validate().is_ok());
        assert!(theme.styles().resolve("grid.overlay").is_some());
    }

    #[test]
    fn test_body_overlay_cycle_names_the_path() {
        let theme = Theme::new()
            .add("grid.overlay", "grid.body")
            .add("grid.body", "grid.overlay");
        let err = theme.validate().unwrap_err();

        assert!(matches!(err, StyleValidationError::CycleDetected { .. }));
        assert_eq!(
            err.to_string(),
            "cycle detected in style aliases: grid.body -> grid.overlay -> grid.body"
        );
    }

    #[test]
    fn test_renderer_refuses_broken_theme() {
        let theme = Theme::new().add("grid.footer", "grid.missing");
        match Renderer::with_output(theme, OutputMode::Text) {
            Err(crate::Error::Style(StyleValidationError::UnresolvedAlias { from, to })) => {
                assert_eq!((from.as_str(), to.as_str()), ("grid.footer", "grid.missing"));
            }
            other => panic!("expected style error, got {:?}", other.map(|_| ())),
        }
    }
}
