//! Column width rules and table decorations.

use crate::util::display_width;

/// How a column's width is decided.
#[derive(Clone, Debug, PartialEq)]
pub enum Width {
    /// Exactly this many columns.
    Fixed(usize),
    /// Sized to the widest cell, clamped to the bounds.
    Bounded {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// A share of the leftover width proportional to `weight`, never below `min`.
    Flex { weight: f32, min: usize },
}

/// A column of the table layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub width: Width,
}

impl Column {
    pub fn new(width: Width) -> Self {
        Self { width }
    }
}

/// Strings drawn around and between cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decorations {
    pub separator: String,
    pub prefix: String,
    pub suffix: String,
}

impl Decorations {
    /// Width taken by decorations on a line with `num_columns` cells.
    pub fn overhead(&self, num_columns: usize) -> usize {
        let separators = num_columns.saturating_sub(1) * display_width(&self.separator);
        display_width(&self.prefix) + display_width(&self.suffix) + separators
    }
}

/// Column widths plus decorations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableSpec {
    pub columns: Vec<Column>,
    pub decorations: Decorations,
}

impl TableSpec {
    pub fn builder() -> TableSpecBuilder {
        TableSpecBuilder::default()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

#[derive(Clone, Debug, Default)]
pub struct TableSpecBuilder {
    spec: TableSpec,
}

impl TableSpecBuilder {
    pub fn column(mut self, column: Column) -> Self {
        self.spec.columns.push(column);
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.spec.decorations.separator = separator.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.spec.decorations.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.spec.decorations.suffix = suffix.into();
        self
    }

    pub fn build(self) -> TableSpec {
        self.spec
    }
}
