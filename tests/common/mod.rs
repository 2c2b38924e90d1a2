use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const SUBMISSION_HEADER: [&str; 6] = ["name", "order_date", "cake_type", "layers", "state", "email"];

/// Writes `rows` valid submissions, one per customer, to a CSV file.
pub fn generate_submissions(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(SUBMISSION_HEADER)?;
    for i in 1..=rows {
        wtr.write_record([
            format!("customer-{i}").as_str(),
            "2024-03-01",
            "9-round",
            "1",
            "MO",
            "",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Every row of a CSV file, header included.
pub fn read_rows(path: &Path) -> Vec<csv::StringRecord> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("Failed to open CSV")
        .records()
        .map(|r| r.expect("Failed to read record"))
        .collect()
}
