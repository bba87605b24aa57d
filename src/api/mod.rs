//! Backend HTTP API used by the debug and game-list pages.
//!
//! DESIGN
//! ======
//! Pages talk to the backend through the [`Backend`] capability instead of a
//! global client, so handlers can be driven by a fake in tests. All requests
//! are form-encoded `POST`s; only `/login` and `/add_game` answer with JSON.
//!
//! ERROR HANDLING
//! ==============
//! Every failure surfaces as an [`ApiError`]. Callers decide whether it is
//! logged or shown to the user; nothing is retried.

pub mod http;
pub mod types;

pub use http::HttpBackend;
pub use types::{AddGameForm, AddUserForm, FormError, LoginForm, LoginResponse, UserType};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Status { status: u16, body: String },
    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Parse(String),
    /// A JSON response omitted a field the caller needs.
    #[error("response missing field `{0}`")]
    MissingField(&'static str),
    /// The form was rejected before sending.
    #[error("invalid form: {0}")]
    Form(#[from] FormError),
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

/// Backend endpoints the client pages call.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// `POST /add_user`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is refused.
    async fn add_user(&self, form: &AddUserForm) -> Result<(), ApiError>;

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the reply is not JSON.
    async fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError>;

    /// `POST /add_game`. The acknowledgement body is passed through as-is.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the reply is not JSON.
    async fn add_game(&self, form: &AddGameForm) -> Result<serde_json::Value, ApiError>;
}
