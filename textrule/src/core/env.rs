// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use log::warn;
use std::env::VarError;
use std::fmt::Display;
use std::str::FromStr;

/// Source of environment variables.
pub trait GetEnv {
    fn get(&self, key: &str) -> Result<String, VarError>;
}

/// Reads variables from the process environment.
#[derive(Default)]
pub struct StdEnvGetter;

impl GetEnv for StdEnvGetter {
    fn get(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }
}

/// A helper class to read typed environment variables.
///
/// It keeps a printable summary of every variable it has read.
pub struct Env<EnvGetter: GetEnv> {
    getter: EnvGetter,
    message: String,
}

impl<EnvGetter: GetEnv> Env<EnvGetter> {
    pub fn new(getter: EnvGetter) -> Self {
        Env {
            getter,
            message: String::new(),
        }
    }

    /// Get a value from the environment.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to get.
    /// * `default_value` - The value to return if the key is not set or can't be parsed.
    ///
    /// # Returns
    ///
    /// The value of the environment variable.
    pub fn get<T: FromStr + Display>(&mut self, key: &str, default_value: T) -> T {
        let (value, note) = match self.getter.get(key) {
            Ok(raw) => match raw.parse() {
                Ok(value) => (value, ""),
                Err(_) => {
                    warn!("Invalid value '{}' for {}, using default", raw, key);
                    (default_value, "(invalid)")
                }
            },
            Err(_) => (default_value, "(default)"),
        };

        if note.is_empty() {
            self.message.push_str(&format!("\t{} = {}\n", key, value));
        } else {
            self.message
                .push_str(&format!("\t{} = {} {}\n", key, value, note));
        }
        value
    }

    /// Get pretty printed message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
