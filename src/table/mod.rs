//! Table layout: column width rules, width resolution and the data grid.
//!
//! [`TableSpec`] describes columns and decorations independent of content;
//! [`DataGrid`] maps the record schema onto a spec and produces styled lines.

mod layout;
mod resolve;
mod types;

pub use layout::{
    DataGrid, GridOptions, GridView, Line, Segment, MAX_LINE_WIDTH, NO_ROWS_LABEL,
    TOOLBAR_BUTTONS,
};
pub use resolve::ResolvedWidths;
pub use types::{Column, Decorations, TableSpec, TableSpecBuilder, Width};
