//! Built-in sample rows shown when no data file is given.

use super::record::{Record, RecordId};

#[allow(clippy::too_many_arguments)]
fn bet(
    id: i64,
    date: &str,
    app: &str,
    stake: f64,
    profit: &str,
    event: &str,
    country: &str,
    team: &str,
    txn: &str,
) -> Record {
    Record {
        id: RecordId::Int(id),
        registrar_id: date.to_string(),
        name: app.to_string(),
        age: Some(stake),
        phone: profit.to_string(),
        email: event.to_string(),
        address: country.to_string(),
        city: team.to_string(),
        zip_code: txn.to_string(),
    }
}

/// The sample transactions, in display order with unique ids.
pub fn mock_rows() -> Vec<Record> {
    vec![
        bet(1, "2024-01-03", "BetNova", 35.0, "+42.50", "Premier League", "United Kingdom", "Arsenal", "TXN10001"),
        bet(2, "2024-01-04", "StakeLine", 42.0, "-42.00", "La Liga", "Spain", "Sevilla", "TXN10002"),
        bet(3, "2024-01-06", "OddsHub", 45.0, "+90.00", "IPL", "India", "Mumbai Indians", "TXN10003"),
        bet(4, "2024-01-09", "BetNova", 16.0, "-16.00", "NBA", "United States", "Celtics", "TXN10004"),
        bet(5, "2024-01-11", "LuckyPunt", 31.0, "+12.40", "Serie A", "Italy", "Napoli", "TXN10005"),
        bet(6, "2024-01-12", "StakeLine", 150.0, "-150.00", "Bundesliga", "Germany", "Dortmund", "TXN10006"),
        bet(7, "2024-01-15", "OddsHub", 44.0, "+61.60", "Ligue 1", "France", "Monaco", "TXN10007"),
        bet(8, "2024-01-18", "PlayPick", 36.0, "-36.00", "NFL", "United States", "Chiefs", "TXN10008"),
        bet(9, "2024-01-20", "LuckyPunt", 65.0, "+130.00", "Big Bash", "Australia", "Sixers", "TXN10009"),
        bet(10, "2024-01-23", "BetNova", 25.0, "+18.75", "Eredivisie", "Netherlands", "Ajax", "TXN10010"),
        bet(11, "2024-01-27", "PlayPick", 52.0, "-52.00", "Champions League", "Portugal", "Benfica", "TXN10011"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::validate_rows;

    #[test]
    fn test_mock_rows_are_valid() {
        let rows = mock_rows();
        assert_eq!(rows.len(), 11);
        assert!(validate_rows(&rows).is_ok());
    }
}
