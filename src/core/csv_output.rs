use crate::domain::model::{ReviewRecord, CSV_HEADERS};
use crate::utils::error::{EtlError, Result};
use chrono::NaiveDate;

/// `google_reviews_<city>_<YYYY-MM-DD>.csv`
pub fn output_file_name(city: &str, date: NaiveDate) -> String {
    format!("google_reviews_{}_{}.csv", city, date.format("%Y-%m-%d"))
}

/// Renders the header line followed by one row per record, in order.
/// The header is written even when there are no records.
pub fn render_csv(records: &[ReviewRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}
