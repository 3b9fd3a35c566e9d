//! Checks behind each kind of field constraint

pub mod file;
pub mod text;
