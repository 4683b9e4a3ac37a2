//! Spreadsheet assets shown alongside override views.
//!
//! The first worksheet is read; its first row becomes the headers and every
//! later row a data row. Cells are turned into display strings:
//!
//! - dates in the spreadsheet epoch era (1899/1900) are times, `HH:MM`
//! - dates at midnight use the configured date pattern
//! - other dates are `<date> HH:MM`
//! - numbers with a time-like number format become `HH:MM`

use std::fmt::Write as _;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Date pattern used when none is configured (`3/14/2025`).
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

const SECONDS_PER_DAY: f64 = 86_400.0;
const MINUTES_PER_DAY: f64 = 1_440.0;

/// Whether `pattern` is a usable `chrono` date pattern.
pub fn is_valid_date_format(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

/// A single cell before formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Bool(bool),
    Number {
        value: f64,
        /// Number format code. Cells read through calamine never carry one:
        /// it reports time-formatted cells as [`Data::DateTime`] instead.
        format: Option<String>,
    },
    DateTime(NaiveDateTime),
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Self::Empty,
            Data::String(text) => Self::Text(text.clone()),
            Data::Bool(flag) => Self::Bool(*flag),
            #[allow(clippy::cast_precision_loss)]
            Data::Int(value) => Self::Number {
                value: *value as f64,
                format: None,
            },
            Data::Float(value) => Self::Number {
                value: *value,
                format: None,
            },
            Data::DateTime(excel) => {
                let serial = excel.as_f64();
                serial_to_datetime(serial).map_or(
                    Self::Number {
                        value: serial,
                        format: None,
                    },
                    Self::DateTime,
                )
            },
            Data::DateTimeIso(text) => {
                parse_iso(text).map_or_else(|| Self::Text(text.clone()), Self::DateTime)
            },
            Data::DurationIso(text) => Self::Text(text.clone()),
            Data::Error(err) => Self::Text(err.to_string()),
        }
    }
}

/// Convert a spreadsheet serial day number (epoch 1899-12-30).
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(NaiveTime::MIN);
    #[allow(clippy::cast_possible_truncation)]
    let seconds = (serial * SECONDS_PER_DAY).round() as i64;
    epoch.checked_add_signed(Duration::try_seconds(seconds)?)
}

fn parse_iso(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .or_else(|| {
            NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
                .ok()
                .and_then(|time| Some(NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(time)))
        })
}

/// Format one cell for display.
pub fn format_cell(cell: &CellValue, date_format: &str) -> String {
    match cell {
        CellValue::Empty => String::new(),
        CellValue::Text(text) => text.clone(),
        CellValue::Bool(flag) => flag.to_string(),
        CellValue::DateTime(value) => format_datetime(value, date_format),
        CellValue::Number { value, format } => {
            if format.as_deref().is_some_and(is_time_format) {
                format_day_fraction(*value)
            } else {
                value.to_string()
            }
        },
    }
}

fn format_datetime(value: &NaiveDateTime, date_format: &str) -> String {
    let time = format!("{:02}:{:02}", value.hour(), value.minute());

    if matches!(value.year(), 1899 | 1900) {
        return time;
    }

    let mut date = String::new();
    if write!(date, "{}", value.format(date_format)).is_err() {
        date.clear();
        let _ = write!(date, "{}", value.format(DEFAULT_DATE_FORMAT));
    }
    if value.hour() == 0 && value.minute() == 0 {
        date
    } else {
        format!("{date} {time}")
    }
}

fn is_time_format(format: &str) -> bool {
    format.contains('h') || format.contains(':') || format.contains("AM") || format.contains("PM")
}

/// `HH:MM` for a fraction of a day, rounded to the minute.
fn format_day_fraction(value: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let total = (value * MINUTES_PER_DAY).round() as i64;
    let hours = total.div_euclid(60).rem_euclid(24);
    let minutes = total.rem_euclid(60);
    format!("{hours:02}:{minutes:02}")
}

/// Header row plus data rows, all display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Format raw rows; the first row is the header.
    pub fn from_cells(rows: &[Vec<CellValue>], date_format: &str) -> Self {
        let mut formatted = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| format_cell(cell, date_format))
                    .collect::<Vec<String>>()
            });

        let headers = formatted.next().unwrap_or_default();
        Self {
            headers,
            rows: formatted.collect(),
        }
    }

    /// Parse the first worksheet of an `.xlsx`, `.xls` or `.ods` buffer.
    pub fn from_bytes(bytes: Vec<u8>, date_format: &str) -> Result<Self> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| Error::Parse("workbook has no worksheets".to_string()))??;

        let cells: Vec<Vec<CellValue>> = range
            .rows()
            .map(|row| row.iter().map(CellValue::from).collect())
            .collect();

        Ok(Self::from_cells(&cells, date_format))
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// File for a named asset. Names without an extension are `.xlsx` files.
pub fn asset_path(assets_dir: &Path, name: &str) -> PathBuf {
    if Path::new(name).extension().is_some() {
        assets_dir.join(name)
    } else {
        assets_dir.join(format!("{name}.xlsx"))
    }
}

/// Read and parse a spreadsheet file.
///
/// Every failure is reported as [`Error::Load`]; callers show "no data".
pub async fn load_sheet(path: &Path, date_format: &str) -> Result<SheetTable> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        warn!("Failed to read spreadsheet {}: {e}", path.display());
        Error::Load(format!("{}: {e}", path.display()))
    })?;

    let table = SheetTable::from_bytes(bytes, date_format).map_err(|e| {
        warn!("Failed to parse spreadsheet {}: {e}", path.display());
        Error::Load(format!("{}: {e}", path.display()))
    })?;

    debug!(
        "Loaded {} with {} columns and {} rows",
        path.display(),
        table.headers.len(),
        table.rows.len()
    );
    Ok(table)
}
