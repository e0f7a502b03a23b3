use fp_lir::error::Error;
use fp_lir::ValueKind;

/// Create an evaluation error for a failure of the interpreted program
pub fn interpretation_error(message: impl Into<String>) -> Error {
    Error::evaluation(message)
}

/// Create an internal-consistency error; these are defects of whoever built the nodes
pub fn internal_error(message: impl Into<String>) -> Error {
    Error::internal(message)
}

pub fn kind_mismatch(expected: ValueKind, found: ValueKind) -> Error {
    Error::KindMismatch { expected, found }
}

// Convenience macros for generating interpretation errors

/// Macro to return early with an interpretation error
#[macro_export]
macro_rules! interp_bail {
    ($message:expr) => {
        return Err($crate::error::interpretation_error($message))
    };
}

/// Macro to ensure a condition is true, or return an interpretation error
#[macro_export]
macro_rules! interp_ensure {
    ($cond:expr, $message:expr) => {
        if !($cond) {
            $crate::interp_bail!($message);
        }
    };
}

/// Macro to ensure two value kinds agree, or return an internal error
#[macro_export]
macro_rules! kind_ensure {
    ($expected:expr, $found:expr) => {{
        let expected = $expected;
        let found = $found;
        if expected != found {
            return Err($crate::error::kind_mismatch(expected, found));
        }
    }};
}
