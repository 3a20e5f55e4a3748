use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One billing record as served by `GET /api/reports`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: i64,
    pub client: String,
    #[serde(rename = "grandtotal")]
    pub grand_total: Amount,
    #[serde(rename = "paidamount")]
    pub paid_amount: Amount,
    #[serde(rename = "duedate", deserialize_with = "deserialize_due_date")]
    pub due_date: NaiveDate,
}

impl ReportRecord {
    /// Case-insensitive substring match on the client name only.
    pub fn matches(&self, needle_lowercase: &str) -> bool {
        self.client.to_lowercase().contains(needle_lowercase)
    }

    pub fn grand_total_label(&self) -> String {
        format_amount(&self.grand_total)
    }

    pub fn paid_amount_label(&self) -> String {
        format_amount(&self.paid_amount)
    }

    pub fn due_date_label(&self) -> String {
        self.due_date.format("%Y-%m-%d").to_string()
    }
}

pub fn format_amount(amount: &Amount) -> String {
    format!("Rs. {}", amount)
}

/// Decimal amount kept as the text the server sent, so `1500.50` is shown
/// as `1500.50` and large values keep every digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount(String);

impl Amount {
    /// Accepts an optional sign, digits and at most one decimal point.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let text = raw.trim();
        let digits = text.strip_prefix('-').unwrap_or(text);
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits, None),
        };
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        let valid = !whole.is_empty()
            && all_digits(whole)
            && fraction.map_or(true, |f| !f.is_empty() && all_digits(f));
        if valid {
            Ok(Self(text.to_string()))
        } else {
            Err(format!("invalid amount {:?}", raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Numeric columns come back either as JSON numbers or as strings.
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            Text(String),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Number(number) => number.to_string(),
            Raw::Text(text) => text,
        };
        Amount::parse(&text).map_err(serde::de::Error::custom)
    }
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_due_date(&raw).map_err(serde::de::Error::custom)
}

/// Accepts `2024-01-15` or a full instant; instants keep their UTC date.
pub fn parse_due_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.with_timezone(&Utc).date_naive())
        .map_err(|e| format!("invalid due date {:?}: {}", raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_and_number_amounts() {
        let json = r#"[
            {"id": 1, "client": "Acme Corp", "grandtotal": "1500.50", "paidamount": 200, "duedate": "2024-01-15"},
            {"id": 2, "client": "Globex", "grandtotal": 99.9, "paidamount": "0", "duedate": "2023-11-02T00:00:00.000Z"}
        ]"#;

        let records: Vec<ReportRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].grand_total.as_str(), "1500.50");
        assert_eq!(records[0].paid_amount.as_str(), "200");
        assert_eq!(records[1].grand_total.as_str(), "99.9");
        assert_eq!(records[1].paid_amount.as_str(), "0");
        assert_eq!(records[1].due_date, NaiveDate::from_ymd_opt(2023, 11, 2).unwrap());
    }

    #[test]
    fn instants_are_reduced_to_their_utc_date() {
        let date = parse_due_date("2024-01-14T23:30:00-02:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(parse_due_date("next tuesday").is_err());
    }

    #[test]
    fn labels_match_the_table_format() {
        let record = ReportRecord {
            id: 7,
            client: "Initech".into(),
            grand_total: Amount::parse("1500").unwrap(),
            paid_amount: Amount::parse("250.75").unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        };

        assert_eq!(record.grand_total_label(), "Rs. 1500");
        assert_eq!(record.paid_amount_label(), "Rs. 250.75");
        assert_eq!(record.due_date_label(), "2024-03-09");
    }

    #[test]
    fn amount_labels_keep_the_server_text() {
        let json = r#"[
            {"id": 1, "client": "Acme Corp", "grandtotal": "1500.50", "paidamount": "100.00", "duedate": "2024-01-15"},
            {"id": 2, "client": "Globex", "grandtotal": "12345678901234567.89", "paidamount": "0.00", "duedate": "2024-01-15"}
        ]"#;

        let records: Vec<ReportRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].grand_total_label(), "Rs. 1500.50");
        assert_eq!(records[0].paid_amount_label(), "Rs. 100.00");
        assert_eq!(records[1].grand_total_label(), "Rs. 12345678901234567.89");
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        assert!(Amount::parse("12.5").is_ok());
        assert!(Amount::parse("-3").is_ok());
        assert!(Amount::parse("NaN").is_err());
        assert!(Amount::parse("1.2.3").is_err());
        assert!(Amount::parse("12.").is_err());
        assert!(Amount::parse("").is_err());

        let bad = r#"{"id": 1, "client": "A", "grandtotal": "lots", "paidamount": "1", "duedate": "2024-01-15"}"#;
        assert!(serde_json::from_str::<ReportRecord>(bad).is_err());
    }
}
