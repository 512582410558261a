//! Nutrition Tracker Application Library
//!
//! This library exposes the host-side modules for use in tests and the
//! binary: configuration, weight history ingestion and the countdown ticker.

pub mod config;
pub mod error;
pub mod history;
pub mod ticker;
