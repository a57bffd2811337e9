//! Records fed to the demo driver.
//!
//! A roster is a JSON array of `{ "name": ..., "age": ... }` objects, added in
//! array order.

use std::fs;
use std::path::Path;

use crate::error::RosterError;
use crate::record::Record;

/// The eight records of the reference scenario, in insertion order.
pub fn reference_roster() -> Vec<Record> {
    [
        ("orlando", 35),
        ("denisse", 20),
        ("patrisha", 13),
        ("jenny", -9001),
        ("josefina", 1000),
        ("clark", -1),
        ("alex", 100),
        ("frank", 3),
    ]
    .into_iter()
    .map(|(name, age)| Record::new(name, age))
    .collect()
}

pub fn parse_roster(json: &str) -> Result<Vec<Record>, RosterError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Record>, RosterError> {
    let text = fs::read_to_string(path)?;
    parse_roster(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_of_records() {
        let roster = parse_roster(r#"[{"name":"a","age":2},{"name":"b","age":-3}]"#).unwrap();
        assert_eq!(roster, vec![Record::new("a", 2), Record::new("b", -3)]);
    }

    #[test]
    fn empty_array_is_an_empty_roster() {
        assert!(parse_roster("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_integer_age() {
        let err = parse_roster(r#"[{"name":"a","age":"old"}]"#).unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_roster("/nonexistent/roster.json").unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }

    #[test]
    fn reference_roster_order() {
        let names: Vec<_> = reference_roster()
            .iter()
            .map(|r| r.name().to_owned())
            .collect();
        assert_eq!(
            names,
            ["orlando", "denisse", "patrisha", "jenny", "josefina", "clark", "alex", "frank"]
        );
    }
}
