//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.

pub mod gemini;
pub mod memory;
pub mod random;
