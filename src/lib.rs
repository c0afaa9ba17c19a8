//! # Betboard - the "Bets Made" transactions page for the terminal
//!
//! Renders a header block and a themed data grid of bet transactions. Colors
//! come from a light or dark palette; the grid's regions (header row, body,
//! footer, accent column, toolbar) take palette-derived overrides.
//!
//! ## Quick Start
//!
//! ```rust
//! use betboard::{mock_rows, render_page, ColorMode, OutputMode, PageOptions};
//!
//! let rows = mock_rows();
//! let options = PageOptions::new().output(OutputMode::Text).width(140);
//! let page = render_page(&rows, ColorMode::Light, &options).unwrap();
//! assert!(page.contains("Gambling App"));
//! ```
//!
//! ## Pieces
//!
//! - [`palette_for`]: color tokens for a [`ColorMode`]
//! - [`COLUMNS`]: the fixed nine-column schema
//! - [`load_rows`] / [`mock_rows`]: row sources, validated for unique ids
//! - [`table::DataGrid`]: width resolution and line layout
//! - [`Renderer`]: MiniJinja templates with a theme-aware `style` filter
//! - [`OutputMode`]: styled terminal output, plain text, or JSON/YAML/CSV

pub mod data;
mod error;
mod output;
mod page;
pub mod render;
mod schema;
pub mod style;
pub mod table;
pub mod theme;
mod util;

pub use data::{load_rows, mock_rows, parse_rows, validate_rows, DataFormat, Record, RecordId};
pub use error::{Error, Result};
pub use output::{OutputMode, UnknownOutputMode};
pub use page::{
    export_csv, page_grid, render_page, PageOptions, PageView, DEFAULT_WIDTH, SUBTITLE, TITLE,
};
pub use render::Renderer;
pub use schema::{header_for, Align, ColumnDef, ColumnKind, Field, COLUMNS};
pub use style::{grid_overrides, Region, StyleMap, StyleOverride};
pub use theme::{
    detect_color_mode, palette_for, set_theme_detector, ColorMode, ModeChoice, Palette, Rgb,
    Shade, Theme,
};
pub use util::{display_width, rgb_to_ansi256, truncate_to_width};
