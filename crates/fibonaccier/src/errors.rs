//! Error handling and exit codes.

use fibonaccier_core::calculator::FibError;
use fibonaccier_core::constants::exit_codes;

/// Map a fatal application error to its process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FibError>() {
        Some(fib_err) => fib_error_code(fib_err),
        None => exit_codes::ERROR_GENERIC,
    }
}

/// Map a calculation error to its process exit code.
pub fn fib_error_code(err: &FibError) -> i32 {
    match err {
        FibError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        FibError::Usage(_) | FibError::Io(_) => exit_codes::ERROR_GENERIC,
    }
}
