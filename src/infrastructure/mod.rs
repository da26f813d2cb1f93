//! Infrastructure layer: concrete data access implementations.

pub mod persistence;
