// Copyright 2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use crate::classifier::text::DEFAULT_NORMALIZER;
use crate::classifier::Normalizer;
use crate::core::env::{Env, GetEnv};
use std::fmt::{Display, Formatter};
use textrule_base::logger::Logger;

const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Classifier configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Cfg {
    /// Log levels, e.g. `INFO,textrule/classifier=DEBUG`
    pub log_level: String,
    /// Normalizer applied to answers before the rules run
    pub normalizer: Normalizer,
    env_message: String,
}

impl Default for Cfg {
    fn default() -> Self {
        Cfg {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            normalizer: DEFAULT_NORMALIZER,
            env_message: String::new(),
        }
    }
}

impl Cfg {
    /// Reads the configuration from the environment.
    ///
    /// * `TR_LOG_LEVEL` - log levels (default `INFO`)
    /// * `TR_NORMALIZER` - `String` or `NormalizedString` (default `String`)
    pub fn from_env<EnvGetter: GetEnv>(getter: EnvGetter) -> Self {
        let mut env = Env::new(getter);
        let log_level = env.get("TR_LOG_LEVEL", DEFAULT_LOG_LEVEL.to_string());
        let normalizer = env.get("TR_NORMALIZER", DEFAULT_NORMALIZER);

        Cfg {
            log_level,
            normalizer,
            env_message: env.message().to_string(),
        }
    }

    /// Installs the process logger with the configured levels.
    pub fn init_logger(&self) {
        Logger::init(&self.log_level);
    }
}

impl Display for Cfg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.env_message)
    }
}
