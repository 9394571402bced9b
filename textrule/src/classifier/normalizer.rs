// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use serde_json::Value as JsonValue;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use textrule_base::error::RuleError;
use textrule_base::unprocessable_entity;

/// Converts a raw answer into the string the rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    /// Trims surrounding whitespace.
    String,
    /// Trims surrounding whitespace and collapses inner whitespace runs to one space.
    NormalizedString,
}

impl Normalizer {
    /// Normalizes an answer.
    ///
    /// Strings are taken as they are, numbers and booleans are converted to their
    /// textual form. Null, arrays and objects can't be classified by text rules.
    pub fn normalize(&self, answer: &JsonValue) -> Result<String, RuleError> {
        let text = match answer {
            JsonValue::String(value) => value.clone(),
            JsonValue::Number(value) => value.to_string(),
            JsonValue::Bool(value) => value.to_string(),
            JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => {
                return Err(unprocessable_entity!(
                    "Answer {} can't be normalized to a string",
                    answer
                ));
            }
        };

        Ok(match self {
            Normalizer::String => text.trim().to_string(),
            Normalizer::NormalizedString => text.split_whitespace().collect::<Vec<_>>().join(" "),
        })
    }
}

impl FromStr for Normalizer {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" => Ok(Normalizer::String),
            "normalizedstring" => Ok(Normalizer::NormalizedString),
            _ => Err(unprocessable_entity!("Unknown normalizer '{}'", s)),
        }
    }
}

impl Display for Normalizer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Normalizer::String => "String",
            Normalizer::NormalizedString => "NormalizedString",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("Hello"), "Hello")]
    #[case(json!("  Hello  World \n"), "Hello  World")]
    #[case(json!(""), "")]
    #[case(json!(42), "42")]
    #[case(json!(-1.5), "-1.5")]
    #[case(json!(true), "true")]
    fn string(#[case] answer: JsonValue, #[case] expected: &str) {
        assert_eq!(Normalizer::String.normalize(&answer).unwrap(), expected);
    }

    #[rstest]
    #[case(json!("  Hello  \t World \n"), "Hello World")]
    #[case(json!("   "), "")]
    #[case(json!(false), "false")]
    fn normalized_string(#[case] answer: JsonValue, #[case] expected: &str) {
        assert_eq!(
            Normalizer::NormalizedString.normalize(&answer).unwrap(),
            expected
        );
    }

    #[rstest]
    #[case(json!(null), "[UnprocessableEntity] Answer null can't be normalized to a string")]
    #[case(json!(["a"]), "[UnprocessableEntity] Answer [\"a\"] can't be normalized to a string")]
    #[case(json!({"a": 1}), "[UnprocessableEntity] Answer {\"a\":1} can't be normalized to a string")]
    fn non_scalar(
        #[case] answer: JsonValue,
        #[case] message: &str,
        #[values(Normalizer::String, Normalizer::NormalizedString)] normalizer: Normalizer,
    ) {
        let err = normalizer.normalize(&answer).err().unwrap();
        assert_eq!(err.to_string(), message);
    }

    #[rstest]
    #[case("String", Normalizer::String)]
    #[case("string", Normalizer::String)]
    #[case("NormalizedString", Normalizer::NormalizedString)]
    #[case("NORMALIZEDSTRING", Normalizer::NormalizedString)]
    fn parse(#[case] name: &str, #[case] expected: Normalizer) {
        assert_eq!(name.parse::<Normalizer>().unwrap(), expected);
        assert_eq!(expected.to_string().parse::<Normalizer>().unwrap(), expected);
    }

    #[rstest]
    fn parse_unknown() {
        assert_eq!(
            "Soundex".parse::<Normalizer>().err().unwrap(),
            unprocessable_entity!("Unknown normalizer 'Soundex'")
        );
    }
}
