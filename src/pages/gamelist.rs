//! Game-list page: create a new game.

#[cfg(test)]
#[path = "gamelist_test.rs"]
mod gamelist_test;

use serde_json::Value;
use tracing::{error, info};

use super::Dialog;
use crate::api::{AddGameForm, ApiError, Backend};

pub const MISSING_NAME_MESSAGE: &str = "Enter a game name.";
pub const MISSING_DESCRIPTION_MESSAGE: &str = "Enter a game description.";

/// Outcome of pressing "create game".
#[derive(Debug, Clone, PartialEq)]
pub enum AddGameOutcome {
    /// The backend acknowledged the game; its body is passed through.
    Created(Value),
    /// Input was incomplete; the message was shown and nothing was sent.
    Invalid(&'static str),
}

/// Trim both fields and require them to be non-empty, name first.
///
/// # Errors
///
/// Returns the message to show the user.
pub fn validate_add_game_input(name: &str, description: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MISSING_NAME_MESSAGE);
    }
    let description = description.trim();
    if description.is_empty() {
        return Err(MISSING_DESCRIPTION_MESSAGE);
    }
    Ok((name.to_owned(), description.to_owned()))
}

/// Validate and submit the new-game form for the user identified by `user_key`.
///
/// # Errors
///
/// Returns the backend error; it is logged, not shown.
pub async fn submit_add_game(
    backend: &dyn Backend,
    dialog: &dyn Dialog,
    user_key: &str,
    name: &str,
    description: &str,
) -> Result<AddGameOutcome, ApiError> {
    let (game_name, game_description) = match validate_add_game_input(name, description) {
        Ok(fields) => fields,
        Err(message) => {
            dialog.alert(message);
            return Ok(AddGameOutcome::Invalid(message));
        }
    };

    let form = AddGameForm { user_key: user_key.to_owned(), game_name, game_description };
    match backend.add_game(&form).await {
        Ok(ack) => {
            info!(game_name = %form.game_name, "add_game: created");
            Ok(AddGameOutcome::Created(ack))
        }
        Err(e) => {
            error!(error = %e, "add_game: error");
            Err(e)
        }
    }
}
