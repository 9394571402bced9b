// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use crate::classifier::operators::string_param;
use crate::classifier::text::equals;
use crate::classifier::{Boxed, BoxedNode, Context, Inputs, Node};
use textrule_base::error::RuleError;

/// A node matching answers equal to the parameter, ignoring case.
pub(crate) struct Equals {
    x: String,
}

impl Node for Equals {
    fn apply(&self, context: &Context) -> bool {
        equals(context.answer(), &self.x)
    }

    fn print(&self) -> String {
        format!("Equals({:?})", self.x)
    }
}

impl Equals {
    pub fn new(x: impl Into<String>) -> Self {
        Self { x: x.into() }
    }
}

impl Boxed for Equals {
    const NAME: &'static str = "equals";
    const DESCRIPTION: &'static str = "The given value should be equal to {{x}}, ignoring case.";

    fn boxed(inputs: &Inputs) -> Result<BoxedNode, RuleError> {
        Ok(Box::new(Equals::new(string_param::<Self>(inputs, "x")?)))
    }
}
