// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use crate::classifier::{Boxed, BoxedNode, Context, Inputs, Node};
use textrule_base::error::RuleError;
use textrule_base::unprocessable_entity;

/// The fallback rule closing every ruleset. It matches any answer.
pub(crate) struct DefaultRule;

impl Node for DefaultRule {
    fn apply(&self, _context: &Context) -> bool {
        true
    }

    fn print(&self) -> String {
        "Default".to_string()
    }
}

impl Boxed for DefaultRule {
    const NAME: &'static str = "Default";
    const DESCRIPTION: &'static str = "Default";

    fn boxed(inputs: &Inputs) -> Result<BoxedNode, RuleError> {
        if !inputs.is_empty() {
            return Err(unprocessable_entity!("Rule 'Default' takes no parameters"));
        }
        Ok(Box::new(DefaultRule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("")]
    #[case("anything")]
    fn apply(#[case] answer: &str) {
        assert!(DefaultRule.apply(&Context::new(answer)));
    }

    #[rstest]
    fn no_parameters() {
        let inputs = json!({"x": "a"});
        assert_eq!(
            DefaultRule::boxed(inputs.as_object().unwrap()).err().unwrap(),
            unprocessable_entity!("Rule 'Default' takes no parameters")
        );
        assert!(DefaultRule::boxed(&Inputs::new()).is_ok());
    }
}
