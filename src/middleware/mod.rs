//! Middleware del sistema
//!
//! Capas transversales del router.

pub mod cors;

pub use cors::cors_layer;
