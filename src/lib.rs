//! Roomify: upload a 2D floor plan and jump to its visualizer.
//!
//! The crate splits into a UI-free core ([`upload`], [`landing`],
//! [`constants`]) and the eframe shell in [`app`] that wires it to real
//! input, timers and rendering.

pub mod app;
pub mod auth;
pub mod config;
pub mod constants;
pub mod landing;
pub mod upload;
pub mod utils;
