//! Payment history storage for pondok payment detection
//!
//! Provides:
//! - An owned, append-only payment history with manual edits
//! - CSV export (and re-import) of the history for spreadsheet use

pub mod error;
pub mod export;
pub mod history;

pub use error::PersistenceError;
pub use export::{
    export_file_name, read_csv, to_csv_bytes, write_csv, EXPORT_COLUMNS, EXPORT_CONTENT_TYPE,
};
pub use history::{PaymentHistory, RecordEdit};
