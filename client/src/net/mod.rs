//! Networking modules for the backend auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the request/response
//! bodies. Both go through the gateway's `/api` proxy, so every path is
//! same-origin.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod api_fake;
