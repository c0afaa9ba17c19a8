//! Grid layout: turns columns and records into styled text lines.
//!
//! Each line is a list of [`Segment`]s, a piece of text plus the theme style
//! name to render it with. Borders are drawn unless the style map removes
//! them for their region.

use serde::Serialize;

use super::resolve::ResolvedWidths;
use super::types::{Column, TableSpec, Width};
use crate::data::Record;
use crate::schema::{Align, ColumnDef};
use crate::style::{Region, StyleMap};
use crate::util::{display_width, pad_left, pad_right, truncate_to_width};

/// Labels of the grid toolbar buttons.
pub const TOOLBAR_BUTTONS: [&str; 4] = ["COLUMNS", "FILTERS", "DENSITY", "EXPORT"];

/// Shown in place of body rows when there are none.
pub const NO_ROWS_LABEL: &str = "No rows";

const CHECKBOX: &str = "[ ]";
const SEPARATOR: &str = "  ";
/// Widest line the grid lays out; wider requests are clamped to this.
pub const MAX_LINE_WIDTH: usize = u16::MAX as usize;

/// Widest a content-sized column may grow.
const MAX_CONTENT_WIDTH: usize = 14;

/// A run of text drawn with one named style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub style: &'static str,
}

impl Segment {
    fn new(text: impl Into<String>, style: &'static str) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

pub type Line = Vec<Segment>;

/// Grid features that are switched per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    pub toolbar: bool,
    pub checkbox_selection: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            toolbar: true,
            checkbox_selection: false,
        }
    }
}

/// The laid-out grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub lines: Vec<Line>,
    /// Number of record rows drawn.
    pub body_rows: usize,
    pub widths: ResolvedWidths,
}

impl GridView {
    /// The lines with styling dropped.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.iter().map(|seg| seg.text.as_str()).collect())
            .collect()
    }
}

/// A data grid over a column schema and a slice of records.
#[derive(Debug, Clone)]
pub struct DataGrid<'a> {
    columns: &'a [ColumnDef],
    rows: &'a [Record],
    options: GridOptions,
}

impl<'a> DataGrid<'a> {
    pub fn new(columns: &'a [ColumnDef], rows: &'a [Record]) -> Self {
        Self {
            columns,
            rows,
            options: GridOptions::default(),
        }
    }

    pub fn options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    /// The table spec for this grid; root borders add a frame around each line.
    pub fn table_spec(&self, styles: &StyleMap) -> TableSpec {
        let mut builder = TableSpec::builder().separator(SEPARATOR);
        if styles.has_border(Region::Root) {
            builder = builder.prefix("│ ").suffix(" │");
        }
        if self.options.checkbox_selection {
            builder = builder.column(Column::new(Width::Fixed(display_width(CHECKBOX))));
        }
        for col in self.columns {
            let label = display_width(col.header_name);
            let width = match col.flex {
                Some(weight) => Width::Flex { weight, min: label },
                None => Width::Bounded {
                    min: Some(label),
                    max: Some(MAX_CONTENT_WIDTH.max(label)),
                },
            };
            builder = builder.column(Column::new(width));
        }
        builder.build()
    }

    /// Cell texts, one row per record, including the checkbox column if enabled.
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|record| {
                let mut row = Vec::with_capacity(self.columns.len() + 1);
                if self.options.checkbox_selection {
                    row.push(CHECKBOX.to_string());
                }
                row.extend(self.columns.iter().map(|col| record.cell(col.field)));
                row
            })
            .collect()
    }

    /// Lays the grid out to fit `total_width` terminal columns where possible.
    ///
    /// Widths above [`MAX_LINE_WIDTH`] are clamped.
    pub fn layout(&self, total_width: usize, styles: &StyleMap) -> GridView {
        let total_width = total_width.min(MAX_LINE_WIDTH);
        let spec = self.table_spec(styles);
        let cells = self.cells();
        let widths = spec.resolve_widths_from_data(total_width, &cells);
        let frame = Frame::new(&spec, &widths, styles.has_border(Region::Root));

        let mut lines: Vec<Line> = Vec::new();

        if self.options.toolbar {
            lines.push(toolbar_line());
        }
        if frame.boxed {
            lines.push(frame.rule('┌', '┐'));
        }

        lines.push(frame.row(self.header_cells(&widths), "grid.header"));
        if styles.has_border(Region::ColumnHeaders) {
            lines.push(frame.rule('├', '┤'));
        }

        let cell_rules = styles.has_border(Region::Cell);
        for row in &cells {
            lines.push(frame.row(self.body_cells(row, &widths), "grid.cell"));
            if cell_rules {
                lines.push(frame.rule('├', '┤'));
            }
        }
        if cells.is_empty() {
            lines.push(frame.full_width(NO_ROWS_LABEL, "grid.overlay"));
        }

        if styles.has_border(Region::Footer) {
            lines.push(frame.rule('├', '┤'));
        }
        lines.push(frame.full_width(&format!("Total Rows: {}", cells.len()), "grid.footer"));
        if frame.boxed {
            lines.push(frame.rule('└', '┘'));
        }

        tracing::debug!(
            rows = cells.len(),
            lines = lines.len(),
            width = frame.inner_width,
            "laid out grid"
        );

        GridView {
            lines,
            body_rows: cells.len(),
            widths,
        }
    }

    fn header_cells(&self, widths: &ResolvedWidths) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(widths.len());
        let mut slots = widths.widths.iter();

        if self.options.checkbox_selection {
            let width = slots.next().copied().unwrap_or(0);
            segments.push(Segment::new(pad_right(CHECKBOX, width), "grid.checkbox"));
        }
        for (col, &width) in self.columns.iter().zip(slots) {
            let text = fit(col.header_name, width, col.header_align());
            segments.push(Segment::new(text, "grid.header"));
        }
        segments
    }

    fn body_cells(&self, row: &[String], widths: &ResolvedWidths) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(row.len());
        let mut values = row.iter().zip(&widths.widths);

        if self.options.checkbox_selection {
            if let Some((value, &width)) = values.next() {
                segments.push(Segment::new(pad_right(value, width), "grid.checkbox"));
            }
        }
        for (col, (value, &width)) in self.columns.iter().zip(values) {
            let style = match col.cell_region {
                Some(Region::NameCell) => "grid.name-cell",
                _ => "grid.cell",
            };
            segments.push(Segment::new(fit(value, width, col.cell_align()), style));
        }
        segments
    }
}

/// Truncates and pads a value to exactly `width` columns.
fn fit(value: &str, width: usize, align: Align) -> String {
    let text = truncate_to_width(value, width);
    match align {
        Align::Left => pad_right(&text, width),
        Align::Right => pad_left(&text, width),
    }
}

fn toolbar_line() -> Line {
    let mut line = Vec::with_capacity(TOOLBAR_BUTTONS.len() * 2);
    for (i, label) in TOOLBAR_BUTTONS.iter().enumerate() {
        if i > 0 {
            line.push(Segment::new(SEPARATOR, "grid.toolbar"));
        }
        line.push(Segment::new(*label, "grid.toolbar"));
    }
    line
}

/// Line assembly for one resolved layout.
struct Frame<'s> {
    spec: &'s TableSpec,
    boxed: bool,
    /// Width of the content between prefix and suffix.
    inner_width: usize,
}

impl<'s> Frame<'s> {
    fn new(spec: &'s TableSpec, widths: &ResolvedWidths, boxed: bool) -> Self {
        let separators = widths.len().saturating_sub(1) * display_width(&spec.decorations.separator);
        Self {
            spec,
            boxed,
            inner_width: widths.total() + separators,
        }
    }

    fn row(&self, cells: Vec<Segment>, fill: &'static str) -> Line {
        let mut line = Vec::with_capacity(cells.len() * 2 + 2);
        self.open(&mut line);
        for (i, cell) in cells.into_iter().enumerate() {
            if i > 0 {
                line.push(Segment::new(self.spec.decorations.separator.clone(), fill));
            }
            line.push(cell);
        }
        self.close(&mut line);
        line
    }

    fn full_width(&self, text: &str, style: &'static str) -> Line {
        let mut line = Vec::with_capacity(3);
        self.open(&mut line);
        let text = truncate_to_width(text, self.inner_width);
        line.push(Segment::new(pad_right(&text, self.inner_width), style));
        self.close(&mut line);
        line
    }

    fn rule(&self, left: char, right: char) -> Line {
        if self.boxed {
            // Prefix and suffix each add a space beside the content
            let bar = "─".repeat(self.inner_width + 2);
            vec![Segment::new(format!("{}{}{}", left, bar, right), "grid.border")]
        } else {
            vec![Segment::new("─".repeat(self.inner_width), "grid.border")]
        }
    }

    fn open(&self, line: &mut Line) {
        if !self.spec.decorations.prefix.is_empty() {
            line.push(Segment::new(self.spec.decorations.prefix.clone(), "grid.border"));
        }
    }

    fn close(&self, line: &mut Line) {
        if !self.spec.decorations.suffix.is_empty() {
            line.push(Segment::new(self.spec.decorations.suffix.clone(), "grid.border"));
        }
    }
}
