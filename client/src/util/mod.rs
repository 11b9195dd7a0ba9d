//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the mount-time session probe and `submit` the form
//! submission flows. Pages only wire their results into signals and the
//! router.

pub mod navigation;
pub mod session;
pub mod submit;
