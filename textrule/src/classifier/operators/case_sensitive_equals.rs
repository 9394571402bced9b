// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use crate::classifier::operators::string_param;
use crate::classifier::text::case_sensitive_equals;
use crate::classifier::{Boxed, BoxedNode, Context, Inputs, Node};
use textrule_base::error::RuleError;

/// A node matching answers identical to the parameter.
pub(crate) struct CaseSensitiveEquals {
    x: String,
}

impl Node for CaseSensitiveEquals {
    fn apply(&self, context: &Context) -> bool {
        case_sensitive_equals(context.answer(), &self.x)
    }

    fn print(&self) -> String {
        format!("CaseSensitiveEquals({:?})", self.x)
    }
}

impl CaseSensitiveEquals {
    pub fn new(x: impl Into<String>) -> Self {
        Self { x: x.into() }
    }
}

impl Boxed for CaseSensitiveEquals {
    const NAME: &'static str = "case_sensitive_equals";
    const DESCRIPTION: &'static str =
        "The given value should be equal to {{x}}. This is case-sensitive.";

    fn boxed(inputs: &Inputs) -> Result<BoxedNode, RuleError> {
        Ok(Box::new(CaseSensitiveEquals::new(string_param::<Self>(
            inputs, "x",
        )?)))
    }
}
