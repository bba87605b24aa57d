//! Form bodies and responses exchanged with the backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account kind accepted by `/add_user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Twitter,
    Facebook,
    #[serde(rename = "normal")]
    Normal,
}

impl UserType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::Normal => "normal",
        }
    }

    #[must_use]
    pub fn is_oauth(self) -> bool {
        matches!(self, Self::Twitter | Self::Facebook)
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Twitter" => Ok(Self::Twitter),
            "Facebook" => Ok(Self::Facebook),
            "normal" => Ok(Self::Normal),
            other => Err(FormError::UnknownUserType(other.to_owned())),
        }
    }
}

/// Client-side rejection of a form before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown user type: {0}")]
    UnknownUserType(String),
    #[error("OAuth account id is required for {0} users")]
    MissingOAuthId(UserType),
    #[error("mail address is required")]
    MissingMail,
    #[error("password is required")]
    MissingPassword,
}

/// Body of `POST /add_user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddUserForm {
    pub user_type: UserType,
    pub user_name: String,
    pub user_pass: String,
    pub user_mail: String,
    pub user_oauth_id: String,
}

impl AddUserForm {
    /// Apply the same acceptance rules the backend enforces.
    ///
    /// # Errors
    ///
    /// OAuth accounts need an OAuth id; normal accounts need mail and password.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.user_type.is_oauth() {
            if self.user_oauth_id.is_empty() {
                return Err(FormError::MissingOAuthId(self.user_type));
            }
            return Ok(());
        }
        if self.user_mail.is_empty() {
            return Err(FormError::MissingMail);
        }
        if self.user_pass.is_empty() {
            return Err(FormError::MissingPassword);
        }
        Ok(())
    }
}

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub mail: String,
    pub pass: String,
}

/// JSON answer to `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub result: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

/// Body of `POST /add_game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddGameForm {
    pub user_key: String,
    pub game_name: String,
    pub game_description: String,
}
