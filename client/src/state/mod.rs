//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth_form` backs the login and signup forms, `settings` backs the account
//! pages. Both are plain structs held in `RwSignal`s by the pages that own
//! them, so transitions are testable without a reactive runtime.

pub mod auth_form;
pub mod settings;
