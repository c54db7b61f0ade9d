use thiserror::Error;

/// Errors raised while constructing a curried wrapper.
///
/// Both variants are raised synchronously by [`curry`](crate::curry) before
/// any accumulation begins; the wrapper itself never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurryError {
    /// The value to curry is not invokable.
    #[error("predicate must be a function, got {actual}")]
    NotCallable { actual: &'static str },

    /// An explicit threshold was supplied and is not a number.
    #[error("length must be a number, got {actual}")]
    InvalidThreshold { actual: &'static str },
}
