use thiserror::Error;

/// Conditions reported by the math types when they are handed input they cannot work with.
///
/// None of these are fatal. The infallible APIs (operators, `get()`, `angle()`, ...) report the
/// error through the current [`DiagnosticSink`](crate::util::diag::DiagnosticSink) and carry on
/// with a neutral value; the `try_*` variants return it instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    #[error("index {index} out of range for {type_name} of length {len}")]
    IndexOutOfRange {
        type_name: &'static str,
        index: usize,
        len: usize,
    },
    #[error("element ({row}, {col}) out of range for {size}x{size} matrix")]
    MatrixIndexOutOfRange { row: usize, col: usize, size: usize },
    #[error("tried to divide {type_name} by 0")]
    DivisionByZero { type_name: &'static str },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl MathError {
    pub(crate) fn index(type_name: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            type_name,
            index,
            len,
        }
    }
    pub(crate) fn matrix_index(row: usize, col: usize, size: usize) -> Self {
        Self::MatrixIndexOutOfRange { row, col, size }
    }
    pub(crate) fn div_by_zero(type_name: &'static str) -> Self {
        Self::DivisionByZero { type_name }
    }
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn is_index_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::MatrixIndexOutOfRange { .. }
        )
    }
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
