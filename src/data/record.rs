//! The record shown in each grid row.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::schema::Field;

/// A row identifier: integer or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// One row of the grid.
///
/// Text fields also accept numbers (a profit of `120` arrives as a number in
/// some feeds) and keep their decimal form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    #[serde(default, deserialize_with = "text_or_number")]
    pub registrar_id: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub phone: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub email: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub address: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub city: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub zip_code: String,
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl Record {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// The display text for one field.
    pub fn cell(&self, field: Field) -> String {
        match field {
            Field::Id => self.id.to_string(),
            Field::RegistrarId => self.registrar_id.clone(),
            Field::Name => self.name.clone(),
            Field::Age => self.age.map(format_number).unwrap_or_default(),
            Field::Phone => self.phone.clone(),
            Field::Email => self.email.clone(),
            Field::Address => self.address.clone(),
            Field::City => self.city.clone(),
            Field::ZipCode => self.zip_code.clone(),
        }
    }
}

/// Whole numbers print without a fractional part.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Accepts JSON/YAML scalars for text fields. CSV bypasses this; see `CsvRow`.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(s)) => s,
        Some(TextOrNumber::Int(n)) => n.to_string(),
        Some(TextOrNumber::Float(n)) => format_number(n),
        Some(TextOrNumber::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}

/// Rejects rows the grid cannot tell apart: blank or repeated ids.
///
/// Ids compare by their displayed form, so `1` and `"1"` collide.
pub fn validate_rows(rows: &[Record]) -> Result<()> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let key = row.id.to_string();
        if key.trim().is_empty() {
            return Err(Error::MissingId { index });
        }
        if let Some(&first) = seen.get(&key) {
            return Err(Error::DuplicateId {
                id: key,
                first,
                second: index,
            });
        }
        seen.insert(key, index);
    }

    tracing::debug!(rows = rows.len(), "validated row ids");
    Ok(())
}
