//! Template export: delimited text and spreadsheet serialization.
//!
//! Export is a pure, order-preserving serialization of the materialized
//! table: a header row with column labels, then one row per template field.
//! No value transformation happens at export time.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::domain::{AppError, Template};

/// Fixed leading columns in every export, before the output columns.
const STRUCTURE_HEADERS: [&str; 3] = ["Field Name", "Content Type", "Char Count"];

/// Write the template as CSV.
pub fn write_csv(template: &Template, path: &Path) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = STRUCTURE_HEADERS.to_vec();
    header.extend(template.columns().iter().map(|c| c.label.as_str()));
    writer.write_record(&header)?;

    for (row_idx, row) in template.rows().iter().enumerate() {
        let mut record: Vec<&str> =
            vec![&row.field_name, row.content_type.as_str(), &row.limit_spec];
        record.extend(template.columns().iter().map(|c| c.cells[row_idx].as_str()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the template as a single-sheet XLSX workbook with a bold header row.
pub fn write_xlsx(template: &Template, path: &Path) -> Result<(), AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    let xlsx_err = |e: rust_xlsxwriter::XlsxError| AppError::Xlsx(e.to_string());

    for (col, label) in STRUCTURE_HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *label, &bold).map_err(xlsx_err)?;
    }
    for (i, column) in template.columns().iter().enumerate() {
        let col = (STRUCTURE_HEADERS.len() + i) as u16;
        worksheet.write_with_format(0, col, column.label.as_str(), &bold).map_err(xlsx_err)?;
    }

    for (row_idx, row) in template.rows().iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        worksheet.write(excel_row, 0, row.field_name.as_str()).map_err(xlsx_err)?;
        worksheet.write(excel_row, 1, row.content_type.as_str()).map_err(xlsx_err)?;
        worksheet.write(excel_row, 2, row.limit_spec.as_str()).map_err(xlsx_err)?;
        for (i, column) in template.columns().iter().enumerate() {
            let col = (STRUCTURE_HEADERS.len() + i) as u16;
            worksheet.write(excel_row, col, column.cells[row_idx].as_str()).map_err(xlsx_err)?;
        }
    }

    workbook.save(path).map_err(xlsx_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::workbook::read_grid;

    fn filled_template() -> Template {
        let mut template = Template::builtin();
        template.set_field("1234567890", "Wow", "Sparkling clean in seconds");
        template.set_field("1234567890", "Pack Contents", "Charger, Manual");
        template
    }

    #[test]
    fn csv_round_trips_every_cell() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        let template = filled_template();

        write_csv(&template, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, ["Field Name", "Content Type", "Char Count", "1234567890"]);

        let records: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        assert_eq!(records.len(), template.rows().len());
        for (row_idx, row) in template.rows().iter().enumerate() {
            assert_eq!(records[row_idx][0], row.field_name);
            assert_eq!(records[row_idx][1], row.content_type.as_str());
            assert_eq!(records[row_idx][2], row.limit_spec);
            assert_eq!(records[row_idx][3], template.cell(row_idx, 0));
        }
    }

    #[test]
    fn csv_escapes_embedded_delimiters_and_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        let mut template = Template::builtin();
        template.set_field("CTN", "Disclaimer", "Line one.\nLine two, with comma.");

        write_csv(&template, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = template.row_index("Disclaimer").unwrap();
        let record = reader.records().nth(row).unwrap().unwrap();
        assert_eq!(&record[3], "Line one.\nLine two, with comma.");
    }

    #[test]
    fn xlsx_round_trips_through_the_workbook_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.xlsx");
        let template = filled_template();

        write_xlsx(&template, &path).unwrap();

        let reparsed = Template::from_grid(read_grid(&path).unwrap()).unwrap();
        assert_eq!(reparsed.rows().len(), template.rows().len());
        assert_eq!(reparsed.columns().len(), 1);
        let wow = reparsed.row_index("Wow").unwrap();
        assert_eq!(reparsed.cell(wow, 0), "Sparkling clean in seconds");
    }
}
