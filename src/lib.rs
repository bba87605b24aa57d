//! Client for the escape-room authoring site.
//!
//! The authoring model lives in the `model` crate; this crate holds what sits
//! around it: backend calls, page handlers, the route table and the editor
//! controller.

pub mod api;
pub mod config;
pub mod editor;
pub mod pages;
pub mod routes;

pub use model;
