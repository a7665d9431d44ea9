use crate::domain::model::{Roster, Student};
use crate::utils::error::{AssignerError, Result};
use serde::{Deserialize, Serialize};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header names and delimiter of the student CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterFormat {
    pub first_name_column: String,
    pub last_name_column: String,
    pub delimiter: u8,
}

impl Default for RosterFormat {
    fn default() -> Self {
        Self {
            first_name_column: "imie".to_string(),
            last_name_column: "nazwisko".to_string(),
            delimiter: b';',
        }
    }
}

/// Parses CSV bytes into a roster of `"<first> <last>"` names, in row order.
pub fn parse_roster(data: &[u8], format: &RosterFormat) -> Result<Roster> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter)
        .quote(b'"')
        .has_headers(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let first_idx = column_index(&headers, &format.first_name_column)?;
    let last_idx = column_index(&headers, &format.last_name_column)?;

    let mut students = Vec::new();
    for record in reader.records() {
        let record = record?;
        let first = record.get(first_idx).unwrap_or_default();
        let last = record.get(last_idx).unwrap_or_default();
        students.push(Student::new(first, last));
    }

    tracing::debug!("Parsed {} students from CSV", students.len());
    Ok(Roster::new(students))
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| AssignerError::MissingColumnError {
            column: column.to_string(),
        })
}
