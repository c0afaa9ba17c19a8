//! Row sources: data files in JSON, YAML or CSV.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

use super::record::{validate_rows, Record, RecordId};

/// Encoding of a rows file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
    Csv,
}

impl DataFormat {
    /// Picks the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            "csv" => Some(DataFormat::Csv),
            _ => None,
        }
    }
}

/// A CSV line with every field kept as written.
///
/// CSV carries no types, so only the bet amount is read as a number; ids and
/// text fields keep leading zeros, signs and trailing decimals.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CsvRow {
    id: String,
    registrar_id: String,
    name: String,
    age: String,
    phone: String,
    email: String,
    address: String,
    city: String,
    zip_code: String,
}

impl CsvRow {
    fn into_record(self, index: usize) -> Result<Record> {
        let age = match self.age.as_str() {
            "" => None,
            raw => Some(raw.parse::<f64>().map_err(|_| Error::InvalidNumber {
                index,
                field: "age",
                value: self.age.clone(),
            })?),
        };

        Ok(Record {
            id: csv_id(self.id),
            registrar_id: self.registrar_id,
            name: self.name,
            age,
            phone: self.phone,
            email: self.email,
            address: self.address,
            city: self.city,
            zip_code: self.zip_code,
        })
    }
}

/// Integer only when the text is exactly the integer's own spelling.
fn csv_id(raw: String) -> RecordId {
    match raw.parse::<i64>() {
        Ok(n) if n.to_string() == raw => RecordId::Int(n),
        _ => RecordId::Text(raw),
    }
}

/// Decodes and validates rows.
///
/// JSON and YAML hold a list of record objects; CSV has a header line naming
/// the record fields.
pub fn parse_rows(content: &str, format: DataFormat) -> Result<Vec<Record>> {
    let rows: Vec<Record> = match format {
        DataFormat::Json => serde_json::from_str(content)?,
        DataFormat::Yaml => serde_yaml::from_str(content)?,
        DataFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(content.as_bytes());
            reader
                .deserialize::<CsvRow>()
                .enumerate()
                .map(|(index, row)| row?.into_record(index))
                .collect::<Result<Vec<_>>>()?
        }
    };

    validate_rows(&rows)?;
    Ok(rows)
}

/// Reads rows from a file, choosing the decoder by extension.
///
/// # Errors
///
/// Fails on unknown extensions, unreadable files, decode errors, and on blank
/// or duplicate ids.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let format = DataFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = parse_rows(&content, format)?;
    tracing::debug!(path = %path.display(), ?format, rows = rows.len(), "loaded rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RecordId;
    use std::io::Write;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DataFormat::from_path(Path::new("bets.JSON")),
            Some(DataFormat::Json)
        );
        assert_eq!(
            DataFormat::from_path(Path::new("bets.yml")),
            Some(DataFormat::Yaml)
        );
        assert_eq!(
            DataFormat::from_path(Path::new("bets.csv")),
            Some(DataFormat::Csv)
        );
        assert_eq!(DataFormat::from_path(Path::new("bets.xml")), None);
        assert_eq!(DataFormat::from_path(Path::new("bets")), None);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
- id: 1
  registrarId: "2024-01-01"
  name: AppX
  age: 50
  phone: 120
- id: 2
  name: AppY
"#;
        let rows = parse_rows(yaml, DataFormat::Yaml).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].phone, "120");
        assert_eq!(rows[1].name, "AppY");
    }

    #[test]
    fn test_parse_csv() {
        let csv = "id,registrarId,name,age,phone,email,address,city,zipCode\n\
                   1,2024-01-01,AppX,50,120,EventA,UK,TeamA,TXN001\n\
                   2,2024-01-02,AppY,,-40,EventB,FR,TeamB,TXN002\n";
        let rows = parse_rows(csv, DataFormat::Csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, RecordId::Int(1));
        assert_eq!(rows[0].age, Some(50.0));
        assert_eq!(rows[1].age, None);
        assert_eq!(rows[1].phone, "-40");
        assert_eq!(rows[1].zip_code, "TXN002");
    }

    #[test]
    fn test_parse_csv_keeps_text_as_written() {
        let csv = "id,registrarId,name,age,phone,email,address,city,zipCode\n\
                   1,2024-01-01,AppX,50,+42.50,EventA,UK,TeamA,00123\n\
                   007,2024-01-02,AppY,12.5,-0.10,EventB,FR,TeamB,TXN2\n\
                   7,2024-01-03,AppZ,3,true,EventC,DE,TeamC,1e3\n\
                   1.5,2024-01-04,AppW,,0,EventD,ES,TeamD,x\n\
                   true,2024-01-05,AppV,1,1,EventE,IT,TeamE,y\n";
        let rows = parse_rows(csv, DataFormat::Csv).unwrap();

        assert_eq!(rows[0].phone, "+42.50");
        assert_eq!(rows[0].zip_code, "00123");
        assert_eq!(rows[1].id, RecordId::Text("007".into()));
        assert_eq!(rows[1].phone, "-0.10");
        assert_eq!(rows[1].age, Some(12.5));
        assert_eq!(rows[2].id, RecordId::Int(7));
        assert_eq!(rows[2].phone, "true");
        assert_eq!(rows[2].zip_code, "1e3");
        assert_eq!(rows[3].id, RecordId::Text("1.5".into()));
        assert_eq!(rows[3].age, None);
        assert_eq!(rows[4].id, RecordId::Text("true".into()));
    }

    #[test]
    fn test_parse_csv_bad_amount() {
        let csv = "id,age\n1,50\n2,fifty\n";
        match parse_rows(csv, DataFormat::Csv) {
            Err(Error::InvalidNumber { index, field, value }) => {
                assert_eq!((index, field, value.as_str()), (1, "age", "fifty"));
            }
            other => panic!("expected invalid number, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_csv_blank_id_rejected() {
        let csv = "id,name\n1,AppX\n,AppY\n";
        assert!(matches!(
            parse_rows(csv, DataFormat::Csv),
            Err(Error::MissingId { index: 1 })
        ));
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let json = r#"[{"id": 1}, {"id": 1}]"#;
        assert!(matches!(
            parse_rows(json, DataFormat::Json),
            Err(Error::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_load_rows_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"id": 1, "name": "AppX"}}]"#).unwrap();

        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "AppX");
    }

    #[test]
    fn test_load_rows_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(matches!(
            load_rows(file.path()),
            Err(Error::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_load_rows_missing_file() {
        assert!(matches!(
            load_rows("/nonexistent/betboard/rows.json"),
            Err(Error::Io { .. })
        ));
    }
}
