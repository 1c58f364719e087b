use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FhirError;

/// A FHIR `decimal`.
///
/// FHIR decimals carry their precision in the lexical form (`1.50` is not
/// `1.5`), so the text a value was built from is kept next to the parsed
/// [`Decimal`]. Equality and ordering use the numeric value; encoding writes
/// the text back as a bare JSON number.
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    value: Decimal,
    original_string: Arc<str>,
}

impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PreciseDecimal {}

impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreciseDecimal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl PreciseDecimal {
    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    fn parse_decimal_string(s: &str) -> Option<Decimal> {
        let normalized = s.replace('E', "e");
        if normalized.contains('e') {
            Decimal::from_scientific(&normalized).ok()
        } else {
            normalized.parse::<Decimal>().ok()
        }
    }
}

impl FromStr for PreciseDecimal {
    type Err = FhirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // the text is later emitted as a raw JSON number, so it has to be one
        let is_json_number = serde_json::from_str::<serde_json::Number>(trimmed).is_ok();
        match Self::parse_decimal_string(trimmed) {
            Some(value) if is_json_number => Ok(Self {
                value,
                original_string: Arc::from(trimmed),
            }),
            _ => Err(FhirError::Decimal(s.to_string())),
        }
    }
}

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self {
            value,
            original_string: Arc::from(value.to_string()),
        }
    }
}

impl From<i32> for PreciseDecimal {
    fn from(value: i32) -> Self {
        Decimal::from(value).into()
    }
}

impl fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl Serialize for PreciseDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match serde_json::value::RawValue::from_string(self.original_string.to_string()) {
            Ok(raw_value) => raw_value.serialize(serializer),
            Err(e) => Err(serde::ser::Error::custom(format!(
                "failed to serialize decimal '{}': {}",
                self.original_string, e
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for PreciseDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json_value = serde_json::Value::deserialize(deserializer)?;
        match json_value {
            serde_json::Value::Number(n) => n.to_string().parse().map_err(de::Error::custom),
            serde_json::Value::String(s) => s.parse().map_err(de::Error::custom),
            other => Err(de::Error::invalid_type(
                match other {
                    serde_json::Value::Null => de::Unexpected::Unit,
                    serde_json::Value::Bool(b) => de::Unexpected::Bool(b),
                    serde_json::Value::Array(_) => de::Unexpected::Seq,
                    _ => de::Unexpected::Map,
                },
                &"a decimal number",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn keeps_lexical_form() {
        let value: PreciseDecimal = "1.50".parse().unwrap();
        assert_eq!(value.value(), dec!(1.5));
        assert_eq!(value.to_string(), "1.50");
        assert_eq!(serde_json::to_string(&value).unwrap(), "1.50");
    }

    #[test]
    fn equality_uses_numeric_value() {
        let a: PreciseDecimal = "2.0".parse().unwrap();
        let b: PreciseDecimal = "2.00".parse().unwrap();
        assert_eq!(a, b);
        assert!(a < PreciseDecimal::from(3));
    }

    #[test]
    fn parses_scientific_notation() {
        let value: PreciseDecimal = "1.2E3".parse().unwrap();
        assert_eq!(value.value(), dec!(1200));
    }

    #[test]
    fn rejects_non_numbers() {
        assert!("abc".parse::<PreciseDecimal>().is_err());
        assert!("1.2.3".parse::<PreciseDecimal>().is_err());
        assert!(serde_json::from_str::<PreciseDecimal>("true").is_err());
    }

    #[test]
    fn decodes_json_number() {
        let value: PreciseDecimal = serde_json::from_str("98.60").unwrap();
        assert_eq!(value.value(), dec!(98.6));
        assert_eq!(value.original_string(), "98.60");
    }
}
