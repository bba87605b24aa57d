//! Page handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each handler corresponds to one button on a page. Handlers receive the
//! backend and the dialog surface as parameters; there is no page-global state.

pub mod debug;
pub mod gamelist;

#[cfg(test)]
#[path = "fakes_test.rs"]
pub(crate) mod fakes;

/// User-facing surface for messages that block the user and for page changes.
pub trait Dialog {
    /// Show a blocking message.
    fn alert(&self, message: &str);

    /// Leave the current page for `to`.
    fn navigate(&self, to: &str);
}
