//! Terminal output
//!
//! Renders rows as an aligned text table, CSV or pretty JSON.

use serde::Serialize;

use crate::error::{AdminError, AdminResult};
use crate::table::TableRow;

/// Output format (table, json, csv)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Render `rows` in the requested format
pub fn render<T: TableRow + Serialize>(rows: &[T], format: OutputFormat) -> AdminResult<String> {
    match format {
        OutputFormat::Table => Ok(text_table(T::headers(), &cells(rows))),
        OutputFormat::Csv => csv_table(T::headers(), &cells(rows)),
        OutputFormat::Json => json(rows),
    }
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> AdminResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AdminError::Decode(e.to_string()))
}

fn cells<T: TableRow>(rows: &[T]) -> Vec<Vec<String>> {
    rows.iter().map(TableRow::cells).collect()
}

/// Column-aligned table with a dashed separator under the header
pub fn text_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "No data\n".to_string();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(headers.to_vec()));
    out.push('\n');
    let total = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

/// RFC 4180 CSV with a header row
pub fn csv_table(headers: &[&str], rows: &[Vec<String>]) -> AdminResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let to_err = |e: csv::Error| AdminError::Decode(e.to_string());

    writer.write_record(headers).map_err(to_err)?;
    for row in rows {
        writer.write_record(row).map_err(to_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AdminError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AdminError::Decode(e.to_string()))
}
