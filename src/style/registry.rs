//! Registry of named styles.

use std::collections::HashMap;

use console::Style;

use super::error::StyleValidationError;
use super::value::StyleValue;

/// Prefix placed before text whose style name is not registered.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A collection of named styles, where names may alias other names.
#[derive(Debug, Clone, Default)]
pub struct Styles {
    entries: HashMap<String, StyleValue>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a style or alias, returning the updated registry for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Follows aliases until a concrete style is found.
    ///
    /// Returns `None` for unknown names, dangling aliases and cycles.
    pub fn resolve(&self, name: &str) -> Option<&Style> {
        let mut current = name;
        // A chain longer than the registry must contain a cycle
        for _ in 0..=self.entries.len() {
            match self.entries.get(current)? {
                StyleValue::Concrete(style) => return Some(style),
                StyleValue::Alias(target) => current = target,
            }
        }
        None
    }

    /// Checks that every alias ends in a concrete style.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        let mut names: Vec<&String> = self.entries.keys().collect();
        names.sort();

        for name in names {
            let mut path = vec![name.clone()];
            let mut current = name;
            while let Some(StyleValue::Alias(target)) = self.entries.get(current) {
                if !self.entries.contains_key(target) {
                    return Err(StyleValidationError::UnresolvedAlias {
                        from: current.clone(),
                        to: target.clone(),
                    });
                }
                if path.contains(target) {
                    path.push(target.clone());
                    return Err(StyleValidationError::CycleDetected { path });
                }
                path.push(target.clone());
                current = target;
            }
        }
        Ok(())
    }

    /// Applies a named style. Without color the text passes through untouched.
    pub fn apply_with_mode(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.resolve(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", DEFAULT_MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Wraps text in `[name]...[/name]` tags instead of applying the style.
    pub fn apply_debug(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            format!("[{}]{}[/{}]", name, text, name)
        } else {
            format!("[{}?]{}[/{}?]", name, text, name)
        }
    }
}
