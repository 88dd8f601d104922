//! Errors reported when creating color models.

use thiserror::Error;

/// Error returned by the `try_new` constructors of the color models.
///
/// The infallible `new` constructors never fail; they coerce invalid
/// channels instead.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A channel was NaN or infinite.
    #[error("{model}: channel `{channel}` must be finite, got {value}")]
    NonFinite {
        /// The name of the model being created.
        model: &'static str,
        /// The name of the offending channel.
        channel: &'static str,
        /// The rejected value.
        value: f64,
    },
}
