//! Spreadsheet export of the payment history
//!
//! Records are written as CSV with a fixed, human-readable header so the file
//! opens directly in a spreadsheet application. The same format can be read
//! back to restore a history.

use std::io::{Read, Write};

use chrono::{NaiveDate, NaiveDateTime};
use pondok_core::{Amount, PaymentRecord, TIMESTAMP_FORMAT};

use crate::PersistenceError;

/// Column names, in order
pub const EXPORT_COLUMNS: [&str; 4] = [
    "Tanggal",
    "Keterangan Pembayaran",
    "Nominal",
    "Potongan Pesan",
];

/// Prefix of the download file name
pub const EXPORT_FILE_PREFIX: &str = "riwayat_pembayaran_pondok";

/// MIME type of the export
pub const EXPORT_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// File name for an export made on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}_{}.csv", EXPORT_FILE_PREFIX, date.format("%Y%m%d"))
}

/// Write records as CSV, header first
pub fn write_csv<'a, W, I>(writer: W, records: I) -> Result<(), PersistenceError>
where
    W: Write,
    I: IntoIterator<Item = &'a PaymentRecord>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_COLUMNS)?;

    let mut rows = 0usize;
    for record in records {
        csv_writer.write_record([
            record.formatted_timestamp(),
            record.description.clone(),
            record.amount.to_string(),
            record.window_text.clone(),
        ])?;
        rows += 1;
    }

    csv_writer.flush()?;
    tracing::debug!(rows, "History exported");
    Ok(())
}

/// Render records as CSV bytes
pub fn to_csv_bytes<'a, I>(records: I) -> Result<Vec<u8>, PersistenceError>
where
    I: IntoIterator<Item = &'a PaymentRecord>,
{
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    Ok(buffer)
}

/// Read records back from an export
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<PaymentRecord>, PersistenceError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?;
    if headers.iter().ne(EXPORT_COLUMNS) {
        return Err(PersistenceError::InvalidHeader {
            expected: EXPORT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            found: headers.iter().map(|c| c.to_string()).collect(),
        });
    }

    let mut records = Vec::new();
    for (row, result) in csv_reader.records().enumerate() {
        let row = row + 1;
        let fields = result?;

        let timestamp = NaiveDateTime::parse_from_str(&fields[0], TIMESTAMP_FORMAT).map_err(|e| {
            PersistenceError::InvalidRow {
                row,
                message: format!("bad timestamp {:?}: {}", &fields[0], e),
            }
        })?;

        records.push(PaymentRecord {
            timestamp,
            description: fields[1].to_string(),
            amount: fields[2].parse::<Amount>().unwrap_or_default(),
            window_text: fields[3].to_string(),
        });
    }

    Ok(records)
}
