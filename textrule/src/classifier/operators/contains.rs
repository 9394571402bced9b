// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use crate::classifier::operators::string_param;
use crate::classifier::text::contains;
use crate::classifier::{Boxed, BoxedNode, Context, Inputs, Node};
use textrule_base::error::RuleError;

/// Matches answers containing the parameter, ignoring case.
pub(crate) struct Contains {
    x: String,
}

impl Node for Contains {
    fn apply(&self, context: &Context) -> bool {
        contains(context.answer(), &self.x)
    }

    fn print(&self) -> String {
        format!("Contains({:?})", self.x)
    }
}

impl Contains {
    pub fn new(x: impl Into<String>) -> Self {
        Self { x: x.into() }
    }
}

impl Boxed for Contains {
    const NAME: &'static str = "contains";
    const DESCRIPTION: &'static str = "The given string should contain {{x}}.";

    fn boxed(inputs: &Inputs) -> Result<BoxedNode, RuleError> {
        Ok(Box::new(Contains::new(string_param::<Self>(inputs, "x")?)))
    }
}
