//! The fixed column schema of the bets grid.
//!
//! The grid reuses the contact record shape, so several fields are shown under
//! betting labels: `age` is the bet amount, `phone` the profit or loss, and so on.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::style::Region;

/// A record field a column can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    RegistrarId,
    Name,
    Age,
    Phone,
    Email,
    Address,
    City,
    ZipCode,
}

impl Field {
    /// The field's key in serialized records.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::RegistrarId => "registrarId",
            Field::Name => "name",
            Field::Age => "age",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Address => "address",
            Field::City => "city",
            Field::ZipCode => "zipCode",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Number,
}

/// Horizontal alignment of a header or cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

/// How one record field is shown as a column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub field: Field,
    pub header_name: &'static str,
    /// Relative share of the leftover width. Columns without one size to content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_align: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Extra region whose style applies to this column's cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_region: Option<Region>,
}

impl ColumnDef {
    const fn text(field: Field, header_name: &'static str) -> Self {
        ColumnDef {
            field,
            header_name,
            flex: None,
            kind: ColumnKind::Text,
            header_align: None,
            align: None,
            cell_region: None,
        }
    }

    const fn flex(mut self, weight: f32) -> Self {
        self.flex = Some(weight);
        self
    }

    /// Cell alignment: explicit, else right for numbers and left for text.
    pub fn cell_align(&self) -> Align {
        self.align.unwrap_or(match self.kind {
            ColumnKind::Number => Align::Right,
            ColumnKind::Text => Align::Left,
        })
    }

    /// Header alignment, with the same defaulting as cells.
    pub fn header_align(&self) -> Align {
        self.header_align.unwrap_or(match self.kind {
            ColumnKind::Number => Align::Right,
            ColumnKind::Text => Align::Left,
        })
    }
}

/// The grid's columns, in display order.
pub const COLUMNS: [ColumnDef; 9] = [
    ColumnDef::text(Field::Id, "ID").flex(0.5),
    ColumnDef::text(Field::RegistrarId, "Date"),
    ColumnDef {
        cell_region: Some(Region::NameCell),
        ..ColumnDef::text(Field::Name, "Gambling App").flex(1.0)
    },
    ColumnDef {
        kind: ColumnKind::Number,
        header_align: Some(Align::Left),
        align: Some(Align::Left),
        ..ColumnDef::text(Field::Age, "Bet Made")
    },
    ColumnDef::text(Field::Phone, "Profit/Loss Made").flex(1.0),
    ColumnDef::text(Field::Email, "Event").flex(1.0),
    ColumnDef::text(Field::Address, "Country").flex(1.0),
    ColumnDef::text(Field::City, "Team").flex(1.0),
    ColumnDef::text(Field::ZipCode, "Txn id").flex(1.0),
];

/// Returns the header label shown for a field.
pub fn header_for(field: Field) -> &'static str {
    COLUMNS
        .iter()
        .find(|col| col.field == field)
        .map(|col| col.header_name)
        .unwrap_or_else(|| field.key())
}
