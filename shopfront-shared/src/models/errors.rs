use thiserror::Error;

/// Failure modes of a cart fetch.
///
/// The `Display` output is the exact user-facing message; the cart view
/// surfaces these verbatim in its error banner.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartFetchError {
    /// No stored credential; detected before any network call is made.
    #[error("You must be logged in to view the cart.")]
    MissingCredentials,

    /// The backend answered with a non-2xx status; carries the raw
    /// response body, uniformly across status codes.
    #[error("Failed to fetch cart items: {0}")]
    Backend(String),

    /// Anything else thrown along the way (connection failure, malformed
    /// response body); carries the underlying error's own text.
    #[error("{0}")]
    Transport(String),
}
