//! Palette-derived overrides for named grid regions.

use std::collections::BTreeMap;
use std::fmt;

use console::Style;
use serde::{Serialize, Serializer};

use crate::theme::{Palette, Rgb, Shade};
use crate::util::rgb_to_ansi256;

/// A named visual part of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// The outer frame of the grid.
    Root,
    /// Every body cell.
    Cell,
    /// Cells of columns that opt into the accent class.
    NameCell,
    /// The column header row.
    ColumnHeaders,
    /// The scrollable body behind the rows.
    Body,
    /// The footer line.
    Footer,
    /// Selection checkboxes.
    Checkbox,
    /// Toolbar buttons.
    ToolbarButton,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::Root,
        Region::Cell,
        Region::NameCell,
        Region::ColumnHeaders,
        Region::Body,
        Region::Footer,
        Region::Checkbox,
        Region::ToolbarButton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Root => "root",
            Region::Cell => "cell",
            Region::NameCell => "name-cell",
            Region::ColumnHeaders => "column-headers",
            Region::Body => "body",
            Region::Footer => "footer",
            Region::Checkbox => "checkbox",
            Region::ToolbarButton => "toolbar-button",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Color and border adjustments for one region. Unset fields keep the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Rgb>,
    /// Removes the region's border line.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub border_none: bool,
}

impl StyleOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn no_border(mut self) -> Self {
        self.border_none = true;
        self
    }

    /// Layers `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: StyleOverride) -> Self {
        StyleOverride {
            color: other.color.or(self.color),
            background_color: other.background_color.or(self.background_color),
            border_none: self.border_none || other.border_none,
        }
    }

    /// The terminal style carrying this override's colors.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = self.color {
            style = style.color256(rgb_to_ansi256(fg.to_tuple()));
        }
        if let Some(bg) = self.background_color {
            style = style.on_color256(rgb_to_ansi256(bg.to_tuple()));
        }
        style
    }
}

/// Overrides keyed by region. Regions without an entry use grid defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct StyleMap {
    regions: BTreeMap<Region, StyleOverride>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, region: Region, value: StyleOverride) -> Self {
        self.regions.insert(region, value);
        self
    }

    pub fn get(&self, region: Region) -> StyleOverride {
        self.regions.get(&region).copied().unwrap_or_default()
    }

    /// Whether the region's border line is drawn.
    pub fn has_border(&self, region: Region) -> bool {
        !self.get(region).border_none
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// The overrides the bets page applies to its grid.
pub fn grid_overrides(palette: &Palette) -> StyleMap {
    StyleMap::new()
        .set(Region::Root, StyleOverride::new().no_border())
        .set(Region::Cell, StyleOverride::new().no_border())
        .set(
            Region::NameCell,
            StyleOverride::new().color(palette.green_accent.shade(Shade::S300)),
        )
        .set(
            Region::ColumnHeaders,
            StyleOverride::new()
                .background(palette.blue_accent.shade(Shade::S700))
                .no_border(),
        )
        .set(
            Region::Body,
            StyleOverride::new().background(palette.primary.shade(Shade::S400)),
        )
        .set(
            Region::Footer,
            StyleOverride::new()
                .no_border()
                .background(palette.blue_accent.shade(Shade::S700)),
        )
        .set(
            Region::Checkbox,
            StyleOverride::new().color(palette.green_accent.shade(Shade::S200)),
        )
        .set(
            Region::ToolbarButton,
            StyleOverride::new().color(palette.grey.shade(Shade::S100)),
        )
}
