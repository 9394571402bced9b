// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

mod case_sensitive_equals;
mod contains;
mod default;
mod equals;
mod starts_with;

pub(crate) use case_sensitive_equals::CaseSensitiveEquals;
pub(crate) use contains::Contains;
pub(crate) use default::DefaultRule;
pub(crate) use equals::Equals;
pub(crate) use starts_with::StartsWith;

use crate::classifier::{Boxed, Inputs};
use serde_json::Value as JsonValue;
use textrule_base::error::RuleError;
use textrule_base::unprocessable_entity;

/// Extracts the only parameter of a text rule. It must be a string.
fn string_param<Rule: Boxed>(inputs: &Inputs, name: &str) -> Result<String, RuleError> {
    if let Some(unexpected) = inputs.keys().find(|key| key.as_str() != name) {
        return Err(unprocessable_entity!(
            "Rule '{}' got unexpected parameter '{}'",
            Rule::NAME,
            unexpected
        ));
    }

    match inputs.get(name) {
        Some(JsonValue::String(value)) => Ok(value.clone()),
        _ => Err(unprocessable_entity!(
            "Rule '{}' requires string parameter '{}'",
            Rule::NAME,
            name
        )),
    }
}
