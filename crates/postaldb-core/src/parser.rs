// crates/postaldb-core/src/parser.rs

//! Parser for GeoNames postal code exports.
//!
//! Each line holds twelve tab-separated columns:
//!
//! ```text
//! country  postal  place  admin1  code1  admin2  code2  admin3  code3  lat  lon  accuracy
//! ```
//!
//! The accuracy column is optional and may be empty or missing entirely.

use std::str::FromStr;

use crate::error::ParseError;
use crate::model::Place;

/// Columns before latitude/longitude that are kept as text.
const TEXT_COLUMNS: usize = 9;
const LATITUDE: usize = 9;
const LONGITUDE: usize = 10;
const ACCURACY: usize = 11;

/// Parse one GeoNames line into a [`Place`].
///
/// Fields are trimmed. Coordinates are not range checked.
pub fn parse_line(line: &str) -> Result<Place, ParseError> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() <= LONGITUDE {
        return Err(ParseError::TooFewFields { found: fields.len() });
    }

    let latitude = parse_number::<f64>("latitude", fields[LATITUDE])?;
    let longitude = parse_number::<f64>("longitude", fields[LONGITUDE])?;
    let accuracy = match fields.get(ACCURACY) {
        Some(v) if !v.is_empty() => Some(parse_number::<i32>("accuracy", v)?),
        _ => None,
    };

    let mut text = [""; TEXT_COLUMNS];
    text.copy_from_slice(&fields[..TEXT_COLUMNS]);

    Ok(Place::from_columns(text, latitude, longitude, accuracy))
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, ParseError> {
    value.parse::<T>().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl FromStr for Place {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LAKEWOOD: &str =
        "US\t18431\tLakewood\tPennsylvania\tPA\tWayne\t127\t\t\t41.3612\t-75.2522\t4";

    #[test]
    fn test_parse_full_line() {
        let p = parse_line(LAKEWOOD).unwrap();
        assert_eq!(p.country_code(), "US");
        assert_eq!(p.postal_code(), "18431");
        assert_eq!(p.place_name(), "Lakewood");
        assert_eq!(p.admin_name1(), Some("Pennsylvania"));
        assert_eq!(p.admin_code1(), Some("PA"));
        assert_eq!(p.admin_name2(), Some("Wayne"));
        assert_eq!(p.admin_code2(), Some("127"));
        assert_eq!(p.admin_name3(), None);
        assert_eq!(p.admin_code3(), None);
        assert_eq!(p.latitude(), 41.3612);
        assert_eq!(p.longitude(), -75.2522);
        assert_eq!(p.accuracy(), Some(4));
    }

    #[test]
    fn test_parse_all_admin_columns() {
        let line = "AD\tAD100\tCanillo\tCanillo\t02\tc2\tn2\tc3\tn3\t42.5833\t1.6667\t6";
        let p = parse_line(line).unwrap();
        assert_eq!(p.admin_name1(), Some("Canillo"));
        assert_eq!(p.admin_code1(), Some("02"));
        assert_eq!(p.admin_name2(), Some("c2"));
        assert_eq!(p.admin_code2(), Some("n2"));
        assert_eq!(p.admin_name3(), Some("c3"));
        assert_eq!(p.admin_code3(), Some("n3"));
        assert_eq!(p.accuracy(), Some(6));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let line = " US \t 18430\tLake Ariel \tPennsylvania\tPA\tWayne\t127\t\t\t 41.4345 \t-75.2065 \t 4 ";
        let p = parse_line(line).unwrap();
        assert_eq!(p.country_code(), "US");
        assert_eq!(p.postal_code(), "18430");
        assert_eq!(p.place_name(), "Lake Ariel");
        assert_eq!(p.latitude(), 41.4345);
        assert_eq!(p.accuracy(), Some(4));
    }

    #[test]
    fn test_blank_accuracy_is_none() {
        let line = "US\t18431\tLakewood\tPennsylvania\tPA\tWayne\t127\t\t\t41.3612\t-75.2522\t";
        assert_eq!(parse_line(line).unwrap().accuracy(), None);
    }

    #[test]
    fn test_missing_accuracy_column_is_none() {
        let line = "US\t18431\tLakewood\tPennsylvania\tPA\tWayne\t127\t\t\t41.3612\t-75.2522";
        assert_eq!(parse_line(line).unwrap().accuracy(), None);
    }

    #[test]
    fn test_accuracy_outside_geonames_codes_is_kept() {
        let base = "US\t18431\tLakewood\tPennsylvania\tPA\tWayne\t127\t\t\t41.3612\t-75.2522\t";
        assert_eq!(parse_line(&format!("{base}-1")).unwrap().accuracy(), Some(-1));
        assert_eq!(parse_line(&format!("{base}300")).unwrap().accuracy(), Some(300));
    }

    #[test]
    fn test_too_few_fields() {
        assert_eq!(
            parse_line("US\t18431\tLakewood"),
            Err(ParseError::TooFewFields { found: 3 })
        );
        assert_eq!(parse_line(""), Err(ParseError::TooFewFields { found: 1 }));
    }

    #[test]
    fn test_bad_numbers() {
        let line = "US\t18431\tLakewood\t\t\t\t\t\t\tnorth\t-75.2522\t4";
        assert!(matches!(
            parse_line(line),
            Err(ParseError::InvalidNumber { field: "latitude", .. })
        ));

        let line = "US\t18431\tLakewood\t\t\t\t\t\t\t41.3612\t\t4";
        assert!(matches!(
            parse_line(line),
            Err(ParseError::InvalidNumber { field: "longitude", .. })
        ));

        let line = "US\t18431\tLakewood\t\t\t\t\t\t\t41.3612\t-75.2522\tfour";
        assert_eq!(
            parse_line(line),
            Err(ParseError::InvalidNumber {
                field: "accuracy",
                value: "four".to_string()
            })
        );
    }

    #[test]
    fn test_from_str_and_to_line() {
        let p: Place = LAKEWOOD.parse().unwrap();
        assert_eq!(p.to_line(), LAKEWOOD);
        assert_eq!(parse_line(&p.to_line()).unwrap(), p);
    }
}
