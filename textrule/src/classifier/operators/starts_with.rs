// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use crate::classifier::operators::string_param;
use crate::classifier::text::starts_with;
use crate::classifier::{Boxed, BoxedNode, Context, Inputs, Node};
use textrule_base::error::RuleError;

/// Matches answers starting with the parameter, ignoring case.
pub(crate) struct StartsWith {
    x: String,
}

impl Node for StartsWith {
    fn apply(&self, context: &Context) -> bool {
        starts_with(context.answer(), &self.x)
    }

    fn print(&self) -> String {
        format!("StartsWith({:?})", self.x)
    }
}

impl StartsWith {
    pub fn new(x: impl Into<String>) -> Self {
        Self { x: x.into() }
    }
}

impl Boxed for StartsWith {
    const NAME: &'static str = "starts_with";
    const DESCRIPTION: &'static str = "The given string should start with {{x}}.";

    fn boxed(inputs: &Inputs) -> Result<BoxedNode, RuleError> {
        Ok(Box::new(StartsWith::new(string_param::<Self>(inputs, "x")?)))
    }
}
