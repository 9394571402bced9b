// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use crate::classifier::operators::{
    CaseSensitiveEquals, Contains, DefaultRule, Equals, StartsWith,
};
use crate::classifier::{Boxed, BoxedNode, Inputs, RuleSpec};
use regex::{Captures, Regex};
use serde_json::Value as JsonValue;
use std::sync::LazyLock;
use textrule_base::error::RuleError;
use textrule_base::unprocessable_entity;

type Factory = fn(&Inputs) -> Result<BoxedNode, RuleError>;

struct Rule {
    name: &'static str,
    description: &'static str,
    factory: Factory,
}

macro_rules! rule {
    ($op:ty) => {
        Rule {
            name: <$op>::NAME,
            description: <$op>::DESCRIPTION,
            factory: <$op>::boxed,
        }
    };
}

static RULES: [Rule; 5] = [
    rule!(Equals),
    rule!(CaseSensitiveEquals),
    rule!(StartsWith),
    rule!(Contains),
    rule!(DefaultRule),
];

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").unwrap());

/// Builds rules from rule specs and renders their descriptions.
pub struct Parser {}

impl Parser {
    pub fn new() -> Self {
        Self {}
    }

    /// Builds the node of a rule spec.
    ///
    /// # Errors
    ///
    /// * `UnprocessableEntity` if the rule is unknown or its inputs are invalid.
    pub fn parse(&self, spec: &RuleSpec) -> Result<BoxedNode, RuleError> {
        let rule = Self::find(&spec.rule)?;
        (rule.factory)(&spec.inputs)
    }

    /// Renders the human readable description of a rule spec.
    ///
    /// Each `{{name}}` placeholder is replaced with the value of the input `name`.
    pub fn describe(&self, spec: &RuleSpec) -> Result<String, RuleError> {
        let rule = Self::find(&spec.rule)?;

        let mut missing = None;
        let description = PLACEHOLDER.replace_all(rule.description, |caps: &Captures| {
            match spec.inputs.get(&caps[1]) {
                Some(JsonValue::String(value)) => value.clone(),
                Some(value) => value.to_string(),
                None => {
                    if missing.is_none() {
                        missing = Some(caps[1].to_string());
                    }
                    String::new()
                }
            }
        });

        if let Some(name) = missing {
            return Err(unprocessable_entity!(
                "Rule '{}' has no parameter '{}' to describe",
                spec.rule,
                name
            ));
        }

        Ok(description.into_owned())
    }

    /// Names and description templates of the supported rules.
    pub fn supported_rules() -> Vec<(&'static str, &'static str)> {
        RULES
            .iter()
            .map(|rule| (rule.name, rule.description))
            .collect()
    }

    fn find(name: &str) -> Result<&'static Rule, RuleError> {
        RULES
            .iter()
            .find(|rule| rule.name == name)
            .ok_or_else(|| unprocessable_entity!("Rule '{}' not supported", name))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
