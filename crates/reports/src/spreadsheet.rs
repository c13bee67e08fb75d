//! Spreadsheet-compatible text export.
//!
//! Tab-separated values with a UTF-8 BOM so desktop spreadsheet apps detect
//! the encoding and split columns without an import wizard.

use crate::table::ReportTable;

const BOM: char = '\u{FEFF}';

/// Tabs inside a cell would shift every following column, so they are
/// replaced with spaces.
fn sanitize(cell: &str) -> String {
    cell.replace('\t', " ")
}

pub fn write_spreadsheet(table: &ReportTable) -> String {
    let mut out = String::new();
    out.push(BOM);

    out.push_str(
        &table
            .columns
            .iter()
            .map(|c| sanitize(c))
            .collect::<Vec<_>>()
            .join("\t"),
    );
    out.push('\n');

    for row in &table.rows {
        out.push_str(
            &row.iter()
                .map(|c| sanitize(c))
                .collect::<Vec<_>>()
                .join("\t"),
        );
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_starts_with_bom_and_is_tab_separated() {
        let mut table = ReportTable::new("Inventory", vec!["SKU", "Name"]);
        table.push_row(vec!["BOX-1".into(), "Cardboard Box".into()]);

        let text = write_spreadsheet(&table);
        assert!(text.starts_with('\u{FEFF}'));
        assert!(text.contains("SKU\tName\n"));
        assert!(text.contains("BOX-1\tCardboard Box\n"));
    }

    #[test]
    fn tabs_in_cells_become_spaces() {
        let mut table = ReportTable::new("Inventory", vec!["Notes"]);
        table.push_row(vec!["left\tright".into()]);

        let text = write_spreadsheet(&table);
        assert!(text.contains("left right"));
    }
}
