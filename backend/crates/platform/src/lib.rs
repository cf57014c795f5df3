//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no game knowledge:
//! - Gemini `generateContent` REST client
//! - In-memory API key handling (zeroized, redacted)

pub mod gemini;
pub mod secret;
