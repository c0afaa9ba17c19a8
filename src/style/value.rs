//! Style values: concrete styles or aliases to other names.

use console::Style;

/// A registered style: either concrete formatting or the name of another style.
#[derive(Debug, Clone)]
pub enum StyleValue {
    Concrete(Style),
    Alias(String),
}

impl From<Style> for StyleValue {
    fn from(style: Style) -> Self {
        StyleValue::Concrete(style)
    }
}

impl From<&str> for StyleValue {
    fn from(name: &str) -> Self {
        StyleValue::Alias(name.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(name: String) -> Self {
        StyleValue::Alias(name)
    }
}
