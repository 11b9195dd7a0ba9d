//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render state handed to them by pages and never issue requests
//! themselves.

pub mod form_error;
