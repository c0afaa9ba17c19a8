//! The "Bets Made" page: header block plus the themed transactions grid.
//!
//! Rendering is a pure function of the color mode, the rows and the options:
//! resolve the palette, derive the grid's region overrides, lay the grid out
//! and run the page template (or serialize, for structured output modes).

use serde::Serialize;

use crate::data::{validate_rows, Record};
use crate::error::Result;
use crate::output::OutputMode;
use crate::render::Renderer;
use crate::schema::{ColumnDef, COLUMNS};
use crate::style::{grid_overrides, StyleMap};
use crate::table::{DataGrid, GridOptions, GridView, Line};
use crate::theme::{palette_for, ColorMode, Theme};

pub const TITLE: &str = "Bets Made";
pub const SUBTITLE: &str = "List of Transactions for Future Reference";

/// Terminal width used when none is configured.
pub const DEFAULT_WIDTH: usize = 120;

const PAGE_TEMPLATE_NAME: &str = "page";
const PAGE_TEMPLATE: &str = concat!(
    r#"{{ title | style("page.title") | nl }}"#,
    r#"{{ subtitle | style("page.subtitle") | nl }}"#,
    r#"{{ "" | nl }}"#,
    r#"{% for line in lines %}{% for seg in line %}{{ seg.text | style(seg.style) }}{% endfor %}{{ "" | nl }}{% endfor %}"#,
);

/// Page rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// Target line width in terminal columns.
    pub width: usize,
    pub output: OutputMode,
    pub grid: GridOptions,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            output: OutputMode::Auto,
            grid: GridOptions::default(),
        }
    }
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn toolbar(mut self, enabled: bool) -> Self {
        self.grid.toolbar = enabled;
        self
    }

    pub fn checkbox_selection(mut self, enabled: bool) -> Self {
        self.grid.checkbox_selection = enabled;
        self
    }
}

/// Everything the page shows, in serializable form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<'a> {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub mode: ColorMode,
    pub toolbar: bool,
    pub checkbox_selection: bool,
    pub columns: &'a [ColumnDef],
    pub rows: &'a [Record],
    pub styles: StyleMap,
}

impl<'a> PageView<'a> {
    pub fn new(rows: &'a [Record], mode: ColorMode, options: &PageOptions) -> Self {
        Self {
            title: TITLE,
            subtitle: SUBTITLE,
            mode,
            toolbar: options.grid.toolbar,
            checkbox_selection: options.grid.checkbox_selection,
            columns: &COLUMNS,
            rows,
            styles: grid_overrides(&palette_for(mode)),
        }
    }
}

#[derive(Serialize)]
struct TemplateData<'a> {
    title: &'static str,
    subtitle: &'static str,
    lines: &'a [Line],
}

/// Lays out the page's grid for a mode.
pub fn page_grid(rows: &[Record], mode: ColorMode, options: &PageOptions) -> GridView {
    let overrides = grid_overrides(&palette_for(mode));
    DataGrid::new(&COLUMNS, rows)
        .options(options.grid)
        .layout(options.width, &overrides)
}

/// Renders the page.
///
/// # Errors
///
/// Fails if the rows contain blank or duplicate ids, or if serialization
/// for a structured output mode fails.
///
/// # Example
///
/// ```rust
/// use betboard::{mock_rows, render_page, ColorMode, OutputMode, PageOptions};
///
/// let rows = mock_rows();
/// let options = PageOptions::new().output(OutputMode::Text);
/// let page = render_page(&rows, ColorMode::Dark, &options).unwrap();
/// assert!(page.starts_with("Bets Made\n"));
/// ```
pub fn render_page(rows: &[Record], mode: ColorMode, options: &PageOptions) -> Result<String> {
    validate_rows(rows)?;
    tracing::debug!(
        %mode,
        output = %options.output,
        rows = rows.len(),
        width = options.width,
        "rendering page"
    );

    if options.output.is_structured() {
        return render_structured(rows, mode, options);
    }
    render_styled(rows, mode, options)
}

fn render_structured(rows: &[Record], mode: ColorMode, options: &PageOptions) -> Result<String> {
    match options.output {
        OutputMode::Csv => export_csv(rows, &COLUMNS),
        OutputMode::Yaml => Ok(serde_yaml::to_string(&PageView::new(rows, mode, options))?),
        _ => Ok(serde_json::to_string_pretty(&PageView::new(rows, mode, options))? + "\n"),
    }
}

fn render_styled(rows: &[Record], mode: ColorMode, options: &PageOptions) -> Result<String> {
    let palette = palette_for(mode);
    let overrides = grid_overrides(&palette);
    let theme = Theme::for_page(&palette, &overrides);
    let grid = page_grid(rows, mode, options);

    let mut renderer = Renderer::with_output(theme, options.output)?;
    renderer.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
    renderer.render(
        PAGE_TEMPLATE_NAME,
        &TemplateData {
            title: TITLE,
            subtitle: SUBTITLE,
            lines: &grid.lines,
        },
    )
}

/// Writes the grid's export: a header of column labels, then one line per record.
pub fn export_csv(rows: &[Record], columns: &[ColumnDef]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns.iter().map(|col| col.header_name))?;
    for record in rows {
        writer.write_record(columns.iter().map(|col| record.cell(col.field)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| {
            csv::Error::from(std::io::Error::new(err.error().kind(), err.error().to_string()))
        })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock_rows;
    use crate::error::Error;
    use crate::table::MAX_LINE_WIDTH;

    fn text_options() -> PageOptions {
        PageOptions::new().output(OutputMode::Text).width(160)
    }

    #[test]
    fn test_text_page_layout() {
        let rows = mock_rows();
        let page = render_page(&rows, ColorMode::Dark, &text_options()).unwrap();
        let lines: Vec<&str> = page.lines().collect();

        assert_eq!(lines[0], TITLE);
        assert_eq!(lines[1], SUBTITLE);
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "COLUMNS  FILTERS  DENSITY  EXPORT");
        assert!(lines[4].starts_with("ID"));
        // header block, toolbar, header row, rows, footer
        assert_eq!(lines.len(), 3 + 1 + 1 + rows.len() + 1);
        assert!(page.ends_with('\n'));
    }

    #[test]
    fn test_without_toolbar() {
        let options = text_options().toolbar(false);
        let page = render_page(&mock_rows(), ColorMode::Dark, &options).unwrap();
        assert!(!page.contains("FILTERS"));
        assert!(page.lines().nth(3).unwrap().starts_with("ID"));
    }

    #[test]
    fn test_mode_changes_only_styling() {
        let rows = mock_rows();
        let light = render_page(&rows, ColorMode::Light, &text_options()).unwrap();
        let dark = render_page(&rows, ColorMode::Dark, &text_options()).unwrap();
        assert_eq!(light, dark);

        let term = text_options().output(OutputMode::Term);
        let light = render_page(&rows, ColorMode::Light, &term).unwrap();
        let dark = render_page(&rows, ColorMode::Dark, &term).unwrap();
        assert_ne!(light, dark);
        assert_eq!(console::strip_ansi_codes(&light), console::strip_ansi_codes(&dark));
    }

    #[test]
    fn test_render_is_idempotent() {
        let rows = mock_rows();
        let options = text_options().output(OutputMode::Term);
        assert_eq!(
            render_page(&rows, ColorMode::Dark, &options).unwrap(),
            render_page(&rows, ColorMode::Dark, &options).unwrap()
        );
    }

    #[test]
    fn test_debug_output_names_styles() {
        let rows = mock_rows();
        let options = text_options().output(OutputMode::TermDebug);
        let page = render_page(&rows, ColorMode::Dark, &options).unwrap();
        assert!(page.contains("[page.title]Bets Made[/page.title]"));
        assert!(page.contains("[grid.name-cell]BetNova"));
        assert!(page.contains("[grid.footer]Total Rows: 11"));
    }

    #[test]
    fn test_render_rejects_duplicate_ids() {
        let rows = vec![Record::new(1), Record::new(1)];
        assert!(matches!(
            render_page(&rows, ColorMode::Dark, &text_options()),
            Err(Error::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_json_view() {
        let rows = mock_rows();
        let options = PageOptions::new().output(OutputMode::Json);
        let out = render_page(&rows, ColorMode::Dark, &options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["title"], TITLE);
        assert_eq!(value["mode"], "dark");
        assert_eq!(value["toolbar"], true);
        assert_eq!(value["columns"].as_array().unwrap().len(), 9);
        assert_eq!(value["rows"].as_array().unwrap().len(), rows.len());
        assert_eq!(value["styles"]["name-cell"]["color"], "#94e2cd");
    }

    #[test]
    fn test_yaml_view() {
        let options = PageOptions::new().output(OutputMode::Yaml);
        let out = render_page(&mock_rows(), ColorMode::Light, &options).unwrap();
        assert!(out.contains("title: Bets Made"));
        assert!(out.contains("mode: light"));
    }

    #[test]
    fn test_csv_export() {
        let rows = mock_rows();
        let options = PageOptions::new().output(OutputMode::Csv);
        let out = render_page(&rows, ColorMode::Dark, &options).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines[0],
            "ID,Date,Gambling App,Bet Made,Profit/Loss Made,Event,Country,Team,Txn id"
        );
        assert_eq!(lines.len(), rows.len() + 1);
        assert!(lines[1].starts_with("1,2024-01-03,BetNova,35,"));
    }

    #[test]
    fn test_page_grid_clamps_huge_width() {
        let rows = vec![Record::new(1)];
        let options = PageOptions::new().width(usize::MAX / 4);
        let grid = page_grid(&rows, ColorMode::Dark, &options);
        assert!(grid.widths.total() <= MAX_LINE_WIDTH);
        for line in grid.plain_lines() {
            assert!(crate::util::display_width(&line) <= MAX_LINE_WIDTH);
        }
    }

    #[test]
    fn test_page_grid_counts_rows() {
        let rows = mock_rows();
        let grid = page_grid(&rows, ColorMode::Light, &PageOptions::new());
        assert_eq!(grid.body_rows, rows.len());
    }
}
