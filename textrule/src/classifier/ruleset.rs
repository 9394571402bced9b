// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use crate::classifier::operators::DefaultRule;
use crate::classifier::{Boxed, Inputs};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use textrule_base::error::RuleError;
use textrule_base::{conflict, not_found, unprocessable_entity};

/// A rule as it is stored in a ruleset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Name of the rule, e.g. `contains`
    pub rule: String,
    /// Parameters of the rule, e.g. `{"x": "hello"}`
    #[serde(default)]
    pub inputs: Inputs,
    /// Destination of the answers matching the rule
    pub dest: String,
    /// Feedback shown for the answers matching the rule
    #[serde(default)]
    pub feedback: String,
    /// Editor attributes of the rule, kept as they are
    #[serde(default)]
    pub attrs: Inputs,
    /// Parameter changes applied when the rule matches, kept as they are
    #[serde(default, rename = "paramChanges")]
    pub param_changes: Vec<JsonValue>,
}

impl RuleSpec {
    pub fn new(rule: &str, dest: &str) -> Self {
        RuleSpec {
            rule: rule.to_string(),
            inputs: Inputs::new(),
            dest: dest.to_string(),
            feedback: String::new(),
            attrs: Inputs::new(),
            param_changes: vec![],
        }
    }

    pub fn with_input(mut self, name: &str, value: impl Into<JsonValue>) -> Self {
        self.inputs.insert(name.to_string(), value.into());
        self
    }

    pub fn with_feedback(mut self, feedback: &str) -> Self {
        self.feedback = feedback.to_string();
        self
    }

    pub fn is_default(&self) -> bool {
        self.rule == DefaultRule::NAME
    }
}

/// The result of a classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// Position of the matched rule in the ruleset
    pub rule_index: usize,
    /// Name of the matched rule
    pub rule: String,
    pub dest: String,
    pub feedback: String,
}

/// An ordered list of rules closed by exactly one `Default` rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RuleSpec>", into = "Vec<RuleSpec>")]
pub struct Ruleset {
    rules: Vec<RuleSpec>,
}

impl Ruleset {
    /// Creates a ruleset sending every answer to `default_dest`.
    pub fn new(default_dest: &str) -> Self {
        Ruleset {
            rules: vec![RuleSpec::new(DefaultRule::NAME, default_dest)],
        }
    }

    /// Creates a ruleset from a list of rules.
    ///
    /// # Errors
    ///
    /// * `UnprocessableEntity` if the list doesn't end with the only `Default` rule.
    pub fn from_rules(rules: Vec<RuleSpec>) -> Result<Self, RuleError> {
        match rules.last() {
            Some(last) if last.is_default() => {}
            _ => {
                return Err(unprocessable_entity!(
                    "Ruleset must end with a Default rule"
                ))
            }
        }

        if let Some(index) = rules[..rules.len() - 1]
            .iter()
            .position(RuleSpec::is_default)
        {
            return Err(unprocessable_entity!(
                "Only the last rule can be a Default rule, found one at #{}",
                index
            ));
        }

        Ok(Ruleset { rules })
    }

    /// Parses a ruleset from a JSON array of rule specs.
    ///
    /// # Errors
    ///
    /// * `BadRequest` if the JSON is malformed or breaks the ruleset invariants.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the ruleset to a JSON array of rule specs.
    pub fn to_json(&self) -> Result<String, RuleError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// A ruleset always has the `Default` rule.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Result<&RuleSpec, RuleError> {
        self.rules
            .get(index)
            .ok_or_else(|| not_found!("Rule #{} not found", index))
    }

    /// Adds a rule right before the `Default` rule.
    pub fn insert(&mut self, spec: RuleSpec) -> Result<(), RuleError> {
        if spec.is_default() {
            return Err(conflict!("Ruleset already has a Default rule"));
        }

        let position = self.default_index();
        self.rules.insert(position, spec);
        Ok(())
    }

    /// Overwrites a rule. The `Default` rule can only be replaced by another `Default` rule.
    pub fn replace(&mut self, index: usize, spec: RuleSpec) -> Result<(), RuleError> {
        self.get(index)?;
        if (index == self.default_index()) != spec.is_default() {
            return Err(conflict!(
                "Rule #{} can't be replaced by '{}': the Default rule must stay last",
                index,
                spec.rule
            ));
        }

        self.rules[index] = spec;
        Ok(())
    }

    /// Exchanges two rules. The `Default` rule can't be moved.
    pub fn swap(&mut self, index_1: usize, index_2: usize) -> Result<(), RuleError> {
        self.get(index_1)?;
        self.get(index_2)?;
        self.check_not_default(index_1, "moved")?;
        self.check_not_default(index_2, "moved")?;

        self.rules.swap(index_1, index_2);
        Ok(())
    }

    /// Removes a rule and returns it. The `Default` rule can't be removed.
    pub fn remove(&mut self, index: usize) -> Result<RuleSpec, RuleError> {
        self.get(index)?;
        self.check_not_default(index, "removed")?;
        Ok(self.rules.remove(index))
    }

    fn default_index(&self) -> usize {
        self.rules.len() - 1
    }

    fn check_not_default(&self, index: usize, action: &str) -> Result<(), RuleError> {
        if index == self.default_index() {
            Err(conflict!("The Default rule can't be {}", action))
        } else {
            Ok(())
        }
    }
}

impl TryFrom<Vec<RuleSpec>> for Ruleset {
    type Error = RuleError;

    fn try_from(rules: Vec<RuleSpec>) -> Result<Self, Self::Error> {
        Ruleset::from_rules(rules)
    }
}

impl From<Ruleset> for Vec<RuleSpec> {
    fn from(ruleset: Ruleset) -> Self {
        ruleset.rules
    }
}
