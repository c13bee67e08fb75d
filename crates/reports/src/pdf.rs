//! Print layout for PDF export.
//!
//! Produces a device-independent layout (positioned text runs in millimetres
//! on A4 portrait pages) that a PDF writer renders verbatim. Keeping layout
//! separate from rendering makes pagination testable without a PDF parser.

use crate::table::ReportTable;

pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;
pub const MARGIN_MM: f64 = 20.0;
pub const TITLE_Y_MM: f64 = 20.0;
pub const BODY_START_Y_MM: f64 = 30.0;
pub const ROW_PITCH_MM: f64 = 7.0;
pub const BODY_END_Y_MM: f64 = 270.0;
pub const FOOTER_Y_MM: f64 = 287.0;
/// Cells longer than this are cut so columns cannot collide.
pub const CELL_CHAR_LIMIT: usize = 20;

const TITLE_SIZE_PT: f64 = 16.0;
const BODY_SIZE_PT: f64 = 10.0;
const FOOTER_SIZE_PT: f64 = 9.0;

/// One positioned text run.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfText {
    pub x: f64,
    pub y: f64,
    pub size_pt: f64,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfPage {
    pub texts: Vec<PdfText>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub pages: Vec<PdfPage>,
}

fn truncate_cell(cell: &str) -> String {
    cell.chars().take(CELL_CHAR_LIMIT).collect()
}

fn column_x(index: usize, column_count: usize) -> f64 {
    let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    MARGIN_MM + usable * index as f64 / column_count as f64
}

fn header_row(page: &mut PdfPage, table: &ReportTable, y: f64) {
    for (i, column) in table.columns.iter().enumerate() {
        page.texts.push(PdfText {
            x: column_x(i, table.columns.len()),
            y,
            size_pt: BODY_SIZE_PT,
            text: truncate_cell(column),
        });
    }
}

/// Lay the table out across as many pages as it needs.
///
/// The first page carries the title; every page repeats the column header and
/// gets a centred `Page i of n` footer.
pub fn layout_pdf(table: &ReportTable) -> PdfLayout {
    let mut pages = Vec::new();

    let mut page = PdfPage::default();
    page.texts.push(PdfText {
        x: MARGIN_MM,
        y: TITLE_Y_MM,
        size_pt: TITLE_SIZE_PT,
        text: table.title.clone(),
    });
    header_row(&mut page, table, BODY_START_Y_MM);
    let mut y = BODY_START_Y_MM + ROW_PITCH_MM;

    for row in &table.rows {
        if y > BODY_END_Y_MM {
            pages.push(page);
            page = PdfPage::default();
            header_row(&mut page, table, BODY_START_Y_MM);
            y = BODY_START_Y_MM + ROW_PITCH_MM;
        }
        for (i, cell) in row.iter().enumerate() {
            page.texts.push(PdfText {
                x: column_x(i, table.columns.len()),
                y,
                size_pt: BODY_SIZE_PT,
                text: truncate_cell(cell),
            });
        }
        y += ROW_PITCH_MM;
    }
    pages.push(page);

    let total = pages.len();
    for (i, page) in pages.iter_mut().enumerate() {
        page.texts.push(PdfText {
            x: PAGE_WIDTH_MM / 2.0,
            y: FOOTER_Y_MM,
            size_pt: FOOTER_SIZE_PT,
            text: format!("Page {} of {}", i + 1, total),
        });
    }

    PdfLayout { pages }
}
