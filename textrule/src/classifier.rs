// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

mod normalizer;
mod operators;
mod parser;
mod ruleset;
pub mod text;

use crate::cfg::Cfg;
use log::debug;
use serde_json::{Map, Value as JsonValue};
use std::fmt::{Debug, Formatter};
use textrule_base::error::RuleError;
use textrule_base::internal_server_error;

pub use normalizer::Normalizer;
pub use parser::Parser;
pub use ruleset::{Outcome, RuleSpec, Ruleset};

/// Parameters of a rule, e.g. `{"x": "hello"}`.
pub type Inputs = Map<String, JsonValue>;

/// The normalized answer a rule is evaluated against.
pub struct Context<'a> {
    answer: &'a str,
}

impl<'a> Context<'a> {
    pub fn new(answer: &'a str) -> Self {
        Context { answer }
    }

    pub fn answer(&self) -> &str {
        self.answer
    }
}

/// A compiled rule.
pub trait Node: Send + Sync {
    /// Checks if the answer in the context satisfies the rule.
    fn apply(&self, context: &Context) -> bool;

    /// Debug representation of the rule.
    fn print(&self) -> String;
}

pub type BoxedNode = Box<dyn Node>;

/// Builds a rule from its parameters.
pub(crate) trait Boxed {
    /// Name of the rule in rule specs.
    const NAME: &'static str;
    /// Human readable description with `{{x}}` placeholders for the parameters.
    const DESCRIPTION: &'static str;

    fn boxed(inputs: &Inputs) -> Result<BoxedNode, RuleError>;
}

impl Debug for dyn Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.print())
    }
}

/// Classifies answers with a ruleset.
///
/// The rules are compiled once and evaluated in order, the first match wins.
pub struct Classifier {
    ruleset: Ruleset,
    nodes: Vec<BoxedNode>,
    normalizer: Normalizer,
}

impl Classifier {
    /// Compiles a ruleset.
    ///
    /// # Errors
    ///
    /// * `UnprocessableEntity` if a rule is unknown or has invalid parameters.
    pub fn new(ruleset: &Ruleset, normalizer: Normalizer) -> Result<Self, RuleError> {
        let parser = Parser::new();
        let nodes = ruleset
            .rules()
            .iter()
            .map(|spec| parser.parse(spec))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Compiled {} rules with {} normalizer: {:?}",
            nodes.len(),
            normalizer,
            nodes
        );

        Ok(Classifier {
            ruleset: ruleset.clone(),
            nodes,
            normalizer,
        })
    }

    /// Compiles a ruleset with the configured normalizer.
    pub fn from_cfg(ruleset: &Ruleset, cfg: &Cfg) -> Result<Self, RuleError> {
        Self::new(ruleset, cfg.normalizer)
    }

    /// Classifies an answer.
    ///
    /// # Errors
    ///
    /// * `UnprocessableEntity` if the answer can't be normalized to a string.
    pub fn classify(&self, answer: &JsonValue) -> Result<Outcome, RuleError> {
        let answer = self.normalizer.normalize(answer)?;
        let context = Context::new(&answer);

        for (index, node) in self.nodes.iter().enumerate() {
            if node.apply(&context) {
                debug!("Answer '{}' matched rule #{} {:?}", answer, index, node);
                let spec = &self.ruleset.rules()[index];
                return Ok(Outcome {
                    rule_index: index,
                    rule: spec.rule.clone(),
                    dest: spec.dest.clone(),
                    feedback: spec.feedback.clone(),
                });
            }
        }

        // a valid ruleset ends with the Default rule
        Err(internal_server_error!("No rule matched answer '{}'", answer))
    }

    /// Classifies a string answer.
    pub fn classify_str(&self, answer: &str) -> Result<Outcome, RuleError> {
        self.classify(&JsonValue::String(answer.to_string()))
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    pub fn normalizer(&self) -> Normalizer {
        self.normalizer
    }
}
