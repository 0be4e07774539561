use super::domain::{BookingRecord, BookingStatus};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;

#[derive(Debug, thiserror::Error)]
pub enum BookingImportError {
    #[error("unable to read booking export: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: '{value}' is not a booking status")]
    UnknownStatus { row: usize, value: String },
    #[error("row {row}: '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: booking id '{id}' appears more than once")]
    DuplicateId { row: usize, id: String },
}

#[derive(Debug, Deserialize)]
struct BookingRow {
    #[serde(rename = "Booking ID")]
    id: String,
    #[serde(rename = "Customer")]
    customer_name: String,
    #[serde(rename = "Room Type")]
    room_type: String,
    #[serde(rename = "Check In")]
    check_in: String,
    #[serde(rename = "Check Out")]
    check_out: String,
    #[serde(rename = "Price")]
    price: u32,
    #[serde(rename = "Status")]
    status: String,
}

fn parse_day(row: usize, value: &str) -> Result<NaiveDate, BookingImportError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| BookingImportError::InvalidDate {
        row,
        value: value.to_string(),
    })
}

/// Reads a bookings CSV export. Rows are numbered from 1, excluding the header.
pub fn import_bookings<R: Read>(reader: R) -> Result<Vec<BookingRecord>, BookingImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for (index, result) in csv_reader.deserialize::<BookingRow>().enumerate() {
        let row = index + 1;
        let raw = result?;

        let status = raw
            .status
            .parse::<BookingStatus>()
            .map_err(|err| BookingImportError::UnknownStatus { row, value: err.0 })?;

        if !seen.insert(raw.id.clone()) {
            return Err(BookingImportError::DuplicateId { row, id: raw.id });
        }

        records.push(BookingRecord {
            check_in: parse_day(row, &raw.check_in)?,
            check_out: parse_day(row, &raw.check_out)?,
            id: raw.id,
            customer_name: raw.customer_name,
            room_type: raw.room_type,
            price: raw.price,
            status,
        });
    }

    tracing::debug!(count = records.len(), "imported booking export");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Booking ID,Customer,Room Type,Check In,Check Out,Price,Status\n";

    #[test]
    fn imports_trimmed_rows() {
        let csv = format!(
            "{HEADER}BK-101, Giulia Verdi ,Standard,2026-05-02,2026-05-04,360,Confirmed\n\
             BK-102,Tom Baker,Junior Suite,2026-05-10,2026-05-12,900,Checked Out\n"
        );

        let records = import_bookings(Cursor::new(csv)).expect("csv imports");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].customer_name, "Giulia Verdi");
        assert_eq!(records[0].nights(), 2);
        assert_eq!(records[1].status, BookingStatus::CheckedOut);
    }

    #[test]
    fn rejects_unknown_status() {
        let csv = format!("{HEADER}BK-1,Ann,Standard,2026-05-02,2026-05-04,360,Pending\n");
        let err = import_bookings(Cursor::new(csv)).expect_err("status unknown");
        assert!(matches!(
            err,
            BookingImportError::UnknownStatus { row: 1, ref value } if value == "Pending"
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let csv = format!(
            "{HEADER}BK-1,Ann,Standard,2026-05-02,2026-05-04,360,Confirmed\n\
             BK-1,Bob,Standard,2026-05-06,2026-05-07,180,Confirmed\n"
        );
        let err = import_bookings(Cursor::new(csv)).expect_err("duplicate id");
        assert!(matches!(err, BookingImportError::DuplicateId { row: 2, .. }));
    }

    #[test]
    fn rejects_malformed_dates() {
        let csv = format!("{HEADER}BK-1,Ann,Standard,02/05/2026,2026-05-04,360,Confirmed\n");
        let err = import_bookings(Cursor::new(csv)).expect_err("date malformed");
        assert!(err.to_string().contains("02/05/2026"));
    }
}
