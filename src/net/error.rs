//! Error taxonomy for the API client.
//!
//! Every variant is terminal from the caller's point of view: there are no
//! retries anywhere in the client. An `AuthRejected` has already cleared
//! the session and scheduled the redirect to the login screen by the time
//! the caller sees it; screens just render the message.

/// Failure of an API call, as surfaced to the calling screen.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response other than an authentication rejection. The
    /// message is the server's `message` field when present.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The server rejected the bearer credential (HTTP 401). The pipeline
    /// has already cleared the session and forced navigation to login.
    #[error("Your session has expired. Please sign in again.")]
    AuthRejected,

    /// The request never produced a response.
    #[error("Could not reach the server. Please try again.")]
    Network(String),

    /// The response body was not the shape the client expected.
    #[error("Unexpected response from the server.")]
    Decode,

    /// Called outside a browser context (SSR render pass).
    #[error("Not available outside the browser.")]
    Unavailable,
}
