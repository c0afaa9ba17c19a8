//! Row data: the record type, validation and row sources.

mod mock;
mod record;
mod source;

pub use mock::mock_rows;
pub use record::{validate_rows, Record, RecordId};
pub use source::{load_rows, parse_rows, DataFormat};
