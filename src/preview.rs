//! CSV Preview
//!
//! Local look at a transactions file before it goes to the backend: which
//! expected columns are absent and how many rows parse.

use std::path::Path;

use crate::models::Transaction;

/// Result of reading a CSV without uploading it
#[derive(Debug, Clone, PartialEq)]
pub struct CsvPreview {
    pub headers: Vec<String>,
    pub missing: Vec<&'static str>,
    pub rows: usize,
    pub bad_rows: usize,
}

/// Expected columns with no matching header. Headers are compared trimmed.
pub fn missing_columns(headers: &csv::StringRecord) -> Vec<&'static str> {
    Transaction::CSV_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h.trim() == *col))
        .collect()
}

/// Read the whole file, counting rows the reader accepts and rejects
pub fn preview_csv(path: &Path) -> Result<CsvPreview, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = 0usize;
    let mut bad_rows = 0usize;
    for record in reader.records() {
        match record {
            Ok(_) => rows += 1,
            Err(_) => bad_rows += 1,
        }
    }

    Ok(CsvPreview {
        headers: headers.iter().map(str::to_string).collect(),
        missing: missing_columns(&headers),
        rows,
        bad_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_headers_with_spaces_match() {
        let file = csv_file(
            "date, description, amount, category\n\
             2024-01-03,Coffee,4.50,Dining\n\
             2024-01-04,Rent,1200.00,Housing\n\
             2024-01-05,Fuel,40.10,Transport\n",
        );

        let preview = preview_csv(file.path()).unwrap();
        assert!(preview.missing.is_empty());
        assert_eq!(preview.rows, 3);
        assert_eq!(preview.bad_rows, 0);
        assert_eq!(preview.headers[1], " description");
    }

    #[test]
    fn test_missing_category_column() {
        let file = csv_file("date,description,amount\n2024-01-03,Coffee,4.50\n");

        let preview = preview_csv(file.path()).unwrap();
        assert_eq!(preview.missing, vec!["category"]);
        assert_eq!(preview.rows, 1);
    }

    #[test]
    fn test_ragged_row_is_counted_bad() {
        let file = csv_file(
            "date,description,amount,category\n\
             2024-01-03,Coffee,4.50,Dining\n\
             2024-01-04,Rent\n",
        );

        let preview = preview_csv(file.path()).unwrap();
        assert_eq!(preview.rows, 1);
        assert_eq!(preview.bad_rows, 1);
    }

    #[test]
    fn test_missing_columns_from_record() {
        let headers = csv::StringRecord::from(vec!["Date", "amount"]);
        assert_eq!(missing_columns(&headers), vec!["date", "description", "category"]);
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(preview_csv(Path::new("/nonexistent/transactions.csv")).is_err());
    }
}
