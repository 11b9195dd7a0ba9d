//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and delegates request/response handling to
//! `util::submit` and `util::session`, and rendering of error text to
//! `components`.

pub mod account;
pub mod home;
pub mod login;
pub mod signup;
pub mod update_password;
