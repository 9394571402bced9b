// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use int_enum::IntEnum;
use std::error::Error;
use std::fmt::{Display, Error as FmtError, Formatter};

/// Status codes of rule errors. They follow the HTTP semantics so that a
/// service embedding the classifier can forward them as is.
#[repr(i16)]
#[derive(Debug, PartialEq, PartialOrd, Copy, Clone, IntEnum)]
pub enum ErrorCode {
    Unknown = -1,

    OK = 200,
    BadRequest = 400,
    NotFound = 404,
    Conflict = 409,
    UnprocessableEntity = 422,
    InternalServerError = 500,
}

/// An error raised while building or evaluating rules.
#[derive(PartialEq, Debug, Clone)]
pub struct RuleError {
    /// The status code.
    pub status: ErrorCode,

    /// The human readable message.
    pub message: String,
}

impl Display for RuleError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        write!(f, "[{:?}] {}", self.status, self.message)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        write!(f, "{}", self.int_value())
    }
}

impl From<serde_json::Error> for RuleError {
    fn from(err: serde_json::Error) -> Self {
        // malformed rule definitions come from the caller
        RuleError {
            status: ErrorCode::BadRequest,
            message: err.to_string(),
        }
    }
}

impl Error for RuleError {
    fn description(&self) -> &str {
        &self.message
    }
}

impl RuleError {
    pub fn new(status: ErrorCode, message: &str) -> Self {
        RuleError {
            status,
            message: message.to_string(),
        }
    }

    pub fn status(&self) -> ErrorCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create a bad request error.
    pub fn bad_request(msg: &str) -> RuleError {
        RuleError {
            status: ErrorCode::BadRequest,
            message: msg.to_string(),
        }
    }

    /// Create a not found error.
    pub fn not_found(msg: &str) -> RuleError {
        RuleError {
            status: ErrorCode::NotFound,
            message: msg.to_string(),
        }
    }

    /// Create a conflict error.
    pub fn conflict(msg: &str) -> RuleError {
        RuleError {
            status: ErrorCode::Conflict,
            message: msg.to_string(),
        }
    }

    /// Create an unprocessable entity error.
    pub fn unprocessable_entity(msg: &str) -> RuleError {
        RuleError {
            status: ErrorCode::UnprocessableEntity,
            message: msg.to_string(),
        }
    }

    /// Create an internal server error.
    pub fn internal_server_error(msg: &str) -> RuleError {
        RuleError {
            status: ErrorCode::InternalServerError,
            message: msg.to_string(),
        }
    }
}

#[macro_export]
macro_rules! bad_request {
    ($msg:expr, $($arg:tt)*) => {
        RuleError::bad_request(&format!($msg, $($arg)*))
    };
    ($msg:expr) => {
        RuleError::bad_request($msg)
    };
}

#[macro_export]
macro_rules! not_found {
    ($msg:expr, $($arg:tt)*) => {
        RuleError::not_found(&format!($msg, $($arg)*))
    };
    ($msg:expr) => {
        RuleError::not_found($msg)
    };
}

#[macro_export]
macro_rules! conflict {
    ($msg:expr, $($arg:tt)*) => {
        RuleError::conflict(&format!($msg, $($arg)*))
    };
    ($msg:expr) => {
        RuleError::conflict($msg)
    };
}

#[macro_export]
macro_rules! unprocessable_entity {
    ($msg:expr, $($arg:tt)*) => {
        RuleError::unprocessable_entity(&format!($msg, $($arg)*))
    };
    ($msg:expr) => {
        RuleError::unprocessable_entity($msg)
    };
}

#[macro_export]
macro_rules! internal_server_error {
    ($msg:expr, $($arg:tt)*) => {
        RuleError::internal_server_error(&format!($msg, $($arg)*))
    };
    ($msg:expr) => {
        RuleError::internal_server_error($msg)
    };
}
