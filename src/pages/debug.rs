//! Debug page: create test accounts and log in.

#[cfg(test)]
#[path = "debug_test.rs"]
mod debug_test;

use tracing::{error, info, warn};

use super::Dialog;
use crate::api::{AddUserForm, ApiError, Backend, LoginForm};

/// Submit the add-user form.
///
/// The outcome is only logged; nothing is shown to the user.
///
/// # Errors
///
/// Returns [`ApiError::Form`] if the form fails client-side validation, or the
/// backend error otherwise.
pub async fn submit_add_user(backend: &dyn Backend, form: &AddUserForm) -> Result<(), ApiError> {
    if let Err(e) = form.validate() {
        warn!(error = %e, user_type = %form.user_type, "add_user: form rejected");
        return Err(e.into());
    }
    match backend.add_user(form).await {
        Ok(()) => {
            info!(user_name = %form.user_name, user_type = %form.user_type, "add_user: success");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "add_user: error");
            Err(e)
        }
    }
}

/// Submit the login form.
///
/// A refused login shows the backend's message; an accepted one navigates to
/// the page the backend names.
///
/// # Errors
///
/// Returns the backend error on transport failure, or
/// [`ApiError::MissingField`] when an accepted login carries no destination.
pub async fn submit_login(backend: &dyn Backend, dialog: &dyn Dialog, form: &LoginForm) -> Result<(), ApiError> {
    let response = match backend.login(form).await {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "login: request failed");
            return Err(e);
        }
    };

    if !response.result {
        dialog.alert(response.message.as_deref().unwrap_or_default());
        return Ok(());
    }

    let to = response.to.ok_or(ApiError::MissingField("to"))?;
    info!(%to, "login: success");
    dialog.navigate(&to);
    Ok(())
}
