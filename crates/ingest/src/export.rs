use anyhow::{Context, Result};
use results_core::{ResultRow, CSV_HEADERS};
use std::io::Write;
use std::path::Path;

/// Serialize rows as CSV with a header line.
pub fn write_csv<W: Write>(writer: W, rows: &[ResultRow]) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer
        .write_record(CSV_HEADERS)
        .context("failed to write CSV header")?;
    for row in rows {
        csv_writer.serialize(row).context("failed to serialize result row")?;
    }
    csv_writer.flush().context("failed to flush CSV output")?;
    Ok(rows.len())
}

pub fn write_csv_file(path: &Path, rows: &[ResultRow]) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let count = write_csv(file, rows)?;

    tracing::info!(path = %path.display(), rows = count, "CSV saved");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultRow {
        ResultRow {
            constituency_id: 195,
            constituency_name: "Maner".to_string(),
            candidate: "Bhai Virendra".to_string(),
            party: "Rashtriya Janata Dal, Bihar".to_string(),
            evm_votes: 102310.0,
            postal_votes: 812.0,
            total_votes: 103122.0,
            vote_share_percent: 47.91,
            source_url: "https://results.example/ConstituencywiseS04195.htm".to_string(),
            rank_in_constituency: Some(1),
        }
    }

    #[test]
    fn writes_header_in_fixed_order() {
        let mut out = Vec::new();
        let count = write_csv(&mut out, &[sample()]).unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), CSV_HEADERS.join(","));
        let record = lines.next().unwrap();
        assert!(record.starts_with("195,Maner,Bhai Virendra,\"Rashtriya Janata Dal, Bihar\","));
        assert!(record.ends_with(",1"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn empty_rows_still_write_header() {
        let mut out = Vec::new();
        assert_eq!(write_csv(&mut out, &[]).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap().trim_end(), CSV_HEADERS.join(","));
    }

    #[test]
    fn writes_file_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("results.csv");
        let count = write_csv_file(&path, &[sample(), sample()]).unwrap();
        assert_eq!(count, 2);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
