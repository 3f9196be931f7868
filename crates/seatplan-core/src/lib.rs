//! Core types and utilities for the seat-arrangement report engine.
//!
//! This crate provides the foundational types used across all other seatplan crates:
//! - Arrangement configuration and the descriptive class identity
//! - Enumerated seat records
//! - Page geometry (the vertical and horizontal layout budget)
//! - Error types

pub mod errors;
pub mod geometry;
pub mod types;

pub use errors::*;
pub use geometry::PageGeometry;
pub use types::*;
