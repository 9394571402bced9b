// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

//! Classification of free-text answers with ordered string rules.
//!
//! A [`classifier::Ruleset`] lists rule specs such as
//! `{"rule": "contains", "inputs": {"x": "o Wo"}, "dest": "next"}` and ends
//! with a `Default` rule. A [`classifier::Classifier`] normalizes an answer
//! and returns the outcome of the first rule that matches it.
pub mod cfg;
pub mod classifier;
pub mod core;
