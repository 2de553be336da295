use std::str::FromStr;

use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::InvalidAmount;

/// Amount written the accounting way: thousands separated by commas and
/// negatives in parentheses, e.g. `(1,200.50)`.
#[derive(Debug)]
pub(crate) struct AmountModel(pub f64);
impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let is_negative = raw.trim().starts_with("(") && raw.trim().ends_with(")");
        let numeric_part = raw.trim().trim_matches(|c| c == '(' || c == ')').trim();
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|_| InvalidAmount::new(s))?;
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

impl Into<f64> for AmountModel {
    fn into(self) -> f64 {
        self.0
    }
}

/// Amount that never fails to decode: numbers pass through, strings are
/// parsed like [`AmountModel`] and anything unparseable counts as 0.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LenientAmountModel(pub f64);

#[derive(serde_derive::Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl<'de> Deserialize<'de> for LenientAmountModel {
    fn deserialize<D>(deserializer: D) -> Result<LenientAmountModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(n) => LenientAmountModel(n),
            RawAmount::Text(s) => {
                LenientAmountModel(AmountModel::from_str(&s).map(|a| a.0).unwrap_or(0.0))
            }
            RawAmount::Other(_) => LenientAmountModel(0.0),
        })
    }
}

impl Into<f64> for LenientAmountModel {
    fn into(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1,200.50", 1200.5)]
    #[case("(30)", -30.0)]
    #[case(" 7 ", 7.0)]
    fn parses_accounting_amounts(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(AmountModel::from_str(input).unwrap().0, expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(AmountModel::from_str("ten").is_err());
    }

    #[rstest]
    #[case("12.5", 12.5)]
    #[case("\"(1,000)\"", -1000.0)]
    #[case("\"n/a\"", 0.0)]
    #[case("null", 0.0)]
    fn lenient_amount_never_fails(#[case] json: &str, #[case] expected: f64) {
        let amount: LenientAmountModel = serde_json::from_str(json).unwrap();
        assert_eq!(amount.0, expected);
    }
}
