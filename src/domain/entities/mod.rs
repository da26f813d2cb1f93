//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation
//! uses a separate struct ([`NewLink`]) so store-assigned fields cannot be
//! forged by callers.

pub mod link;

pub use link::{Link, NewLink};
