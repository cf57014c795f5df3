//! Shared Kernel - vocabulary every High-Low crate agrees on
//!
//! - Unified error type ([`error::app_error::AppError`]) and its HTTP classification
//! - Typed identifiers ([`id::Id`])
//!
//! Only things with one meaning across the whole workspace belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
