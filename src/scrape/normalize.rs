// src/scrape/normalize.rs
//
// Raw `data-stat` records → typed, column-oriented roster.

use serde::{Deserialize, Serialize};

use crate::config::options::HeightMode;
use crate::core::sanitize::capitalize;
use crate::error::FieldError;

use super::RawPlayerRecord;

/// Stat names every player row must carry.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "player",
    "pos",
    "height",
    "weight",
    "birth_date",
    "birth_country",
    "years_experience",
];

/// Parallel columns, one entry per player, in page order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterTable {
    #[serde(rename = "Players")]
    pub players: Vec<String>,
    #[serde(rename = "Position")]
    pub position: Vec<String>,
    #[serde(rename = "Height")]
    pub height: Vec<f64>,
    #[serde(rename = "Weight")]
    pub weight: Vec<f64>,
    #[serde(rename = "Birth Date")]
    pub birth_date: Vec<String>,
    #[serde(rename = "Birth Country")]
    pub birth_country: Vec<String>,
    #[serde(rename = "Years Experience")]
    pub years_experience: Vec<String>,
}

impl RosterTable {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            players: Vec::with_capacity(n),
            position: Vec::with_capacity(n),
            height: Vec::with_capacity(n),
            weight: Vec::with_capacity(n),
            birth_date: Vec::with_capacity(n),
            birth_country: Vec::with_capacity(n),
            years_experience: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// True when every column has the same length.
    pub fn is_rectangular(&self) -> bool {
        let n = self.len();
        [
            self.position.len(),
            self.height.len(),
            self.weight.len(),
            self.birth_date.len(),
            self.birth_country.len(),
            self.years_experience.len(),
        ]
        .iter()
        .all(|&l| l == n)
    }
}

/// Build the roster columns. Fails on the first row missing a required
/// stat or carrying an unparsable height/weight; no partial table is returned.
pub fn normalize(records: &[RawPlayerRecord], height_mode: HeightMode) -> Result<RosterTable, FieldError> {
    let mut table = RosterTable::with_capacity(records.len());

    for (row, rec) in records.iter().enumerate() {
        let [player, pos, height, weight, birth_date, birth_country, years] =
            REQUIRED_FIELDS.map(|name| rec.get(name).ok_or(FieldError::Missing { row, field: name }));

        let player = player?;
        let pos = pos?;
        let height = parse_height(row, height?, height_mode)?;
        let weight = parse_number(row, "weight", weight?)?;
        let birth_date = birth_date?;
        let birth_country = capitalize(birth_country?);
        let years = years?;

        table.players.push(s!(player));
        table.position.push(s!(pos));
        table.height.push(height);
        table.weight.push(weight);
        table.birth_date.push(s!(birth_date));
        table.birth_country.push(birth_country);
        table.years_experience.push(s!(years));
    }

    logd!("Normalize: {} players", table.len());
    Ok(table)
}

fn parse_height(row: usize, raw: &str, mode: HeightMode) -> Result<f64, FieldError> {
    match mode {
        HeightMode::Legacy => parse_number(row, "height", &raw.replace('-', ".")),
        HeightMode::Inches => {
            let bad = || FieldError::NotNumeric { row, field: "height", value: s!(raw) };
            let (feet, inches) = raw.split_once('-').ok_or_else(bad)?;
            let feet: f64 = feet.trim().parse().map_err(|_| bad())?;
            let inches: f64 = inches.trim().parse().map_err(|_| bad())?;
            Ok(feet * 12.0 + inches)
        }
    }
}

// Leading/trailing whitespace is tolerated the way most float readers do.
fn parse_number(row: usize, field: &'static str, raw: &str) -> Result<f64, FieldError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| FieldError::NotNumeric { row, field, value: s!(raw) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(pairs: &[(&str, &str)]) -> RawPlayerRecord {
        pairs.iter().copied().collect()
    }

    fn doe() -> RawPlayerRecord {
        rec(&[
            ("player", "J. Doe"),
            ("pos", "G"),
            ("height", "6-2"),
            ("weight", "190"),
            ("birth_date", "1/1/1995"),
            ("birth_country", "usa"),
            ("years_experience", "3"),
        ])
    }

    #[test]
    fn single_row_maps_every_column() {
        let t = normalize(&[doe()], HeightMode::Legacy).unwrap();
        assert_eq!(t.players, vec!["J. Doe"]);
        assert_eq!(t.position, vec!["G"]);
        assert_eq!(t.height, vec![6.2]);
        assert_eq!(t.weight, vec![190.0]);
        assert_eq!(t.birth_date, vec!["1/1/1995"]);
        assert_eq!(t.birth_country, vec!["Usa"]);
        assert_eq!(t.years_experience, vec!["3"]);
    }

    #[test]
    fn legacy_height_is_textual() {
        assert_eq!(parse_height(0, "6-7", HeightMode::Legacy), Ok(6.7));
        assert_eq!(parse_height(0, "7-0", HeightMode::Legacy), Ok(7.0));
        // 6'10" reads as 6.1, not above 6'9"
        assert_eq!(parse_height(0, "6-10", HeightMode::Legacy), Ok(6.1));
    }

    #[test]
    fn inches_height_is_arithmetic() {
        assert_eq!(parse_height(0, "6-7", HeightMode::Inches), Ok(79.0));
        assert_eq!(parse_height(0, "7-0", HeightMode::Inches), Ok(84.0));
        assert!(parse_height(0, "67", HeightMode::Inches).is_err());
    }

    #[test]
    fn rookie_experience_is_not_coerced() {
        let mut r = doe();
        r.insert("years_experience", "R");
        let t = normalize(&[r], HeightMode::Legacy).unwrap();
        assert_eq!(t.years_experience, vec!["R"]);
    }

    #[test]
    fn country_capitalized_not_title_cased() {
        let mut r = doe();
        r.insert("birth_country", "UNITED STATES");
        let t = normalize(&[r], HeightMode::Legacy).unwrap();
        assert_eq!(t.birth_country, vec!["United states"]);
    }

    #[test]
    fn missing_field_fails_with_row_and_name() {
        let mut fields: Vec<(&str, &str)> = vec![
            ("player", "A"),
            ("height", "6-0"),
            ("weight", "200"),
            ("birth_date", "x"),
            ("birth_country", "us"),
            ("years_experience", "1"),
        ];
        let no_pos = rec(&fields);
        let err = normalize(&[doe(), no_pos], HeightMode::Legacy).unwrap_err();
        assert_eq!(err, FieldError::Missing { row: 1, field: "pos" });

        fields.push(("pos", "C"));
        assert!(normalize(&[rec(&fields)], HeightMode::Legacy).is_ok());
    }

    #[test]
    fn every_required_field_is_enforced() {
        for (i, &name) in REQUIRED_FIELDS.iter().enumerate() {
            let r: RawPlayerRecord = REQUIRED_FIELDS
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &f)| (f, if f == "height" { "6-0" } else { "1" }))
                .collect();
            let err = normalize(&[r], HeightMode::Legacy).unwrap_err();
            assert_eq!(err, FieldError::Missing { row: 0, field: name });
        }
    }

    #[test]
    fn bad_weight_is_not_numeric() {
        let mut r = doe();
        r.insert("weight", "heavy");
        let err = normalize(&[r], HeightMode::Legacy).unwrap_err();
        assert!(matches!(err, FieldError::NotNumeric { field: "weight", .. }));
    }

    #[test]
    fn weight_tolerates_padding() {
        let mut r = doe();
        r.insert("weight", " 245 ");
        let t = normalize(&[r], HeightMode::Legacy).unwrap();
        assert_eq!(t.weight, vec![245.0]);
    }

    #[test]
    fn columns_stay_parallel_and_ordered() {
        let mut second = doe();
        second.insert("player", "K. Roe");
        let input = vec![doe(), second, doe()];
        let a = normalize(&input, HeightMode::Legacy).unwrap();
        let b = normalize(&input, HeightMode::Legacy).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert!(a.is_rectangular());
        assert_eq!(a.players, vec!["J. Doe", "K. Roe", "J. Doe"]);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let t = normalize(&[], HeightMode::Legacy).unwrap();
        assert!(t.is_empty());
        assert!(t.is_rectangular());
    }

    #[test]
    fn serializes_under_display_names() {
        let t = normalize(&[doe()], HeightMode::Legacy).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"Birth Country\":[\"Usa\"]"));
        assert!(json.contains("\"Years Experience\":[\"3\"]"));
    }
}
