//! Database access for the CRUD surface

pub mod queries;

pub use queries::*;
