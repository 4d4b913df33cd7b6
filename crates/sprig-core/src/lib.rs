//! Core types for the Sprig design-to-code engine.
//!
//! This crate provides the foundational types shared by the other sprig crates:
//! - The design-node tree as delivered by the design tool's document API
//! - Value types (colors, rectangles, paints, effects)
//! - The response envelope a batch of requested nodes arrives in
//! - Error types

pub mod document;
pub mod errors;
pub mod node;
pub mod types;

pub use document::*;
pub use errors::*;
pub use node::*;
pub use types::*;
