//! Structured exit codes for the CLI.
//!
//! Responsibilities:
//! - Map errors to process exit codes scripts can branch on.
//!
//! Invariants:
//! - `Interrupted` equals `cancellation::SIGINT_EXIT_CODE`.
//! - Errors that are neither gateway nor config errors map to `GeneralError`.
//! - Exit code 2 is left to clap for usage errors (unknown flags or values).

use gateway_client::GatewayError;
use gateway_config::ConfigError;

use crate::cancellation::SIGINT_EXIT_CODE;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    /// Bad configuration (file, environment or flags).
    ConfigError = 3,
    /// Invalid user input, such as an unknown filter value.
    ValidationError = 5,
    Interrupted = SIGINT_EXIT_CODE,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<&GatewayError> for ExitCode {
    fn from(err: &GatewayError) -> Self {
        if err.is_validation_error() {
            ExitCode::ValidationError
        } else {
            ExitCode::GeneralError
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(_: &ConfigError) -> Self {
        ExitCode::ConfigError
    }
}

/// Extension trait to extract exit codes from errors.
pub trait ExitCodeExt {
    /// Returns `ExitCode::GeneralError` if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<GatewayError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
        }
        ExitCode::GeneralError
    }
}
