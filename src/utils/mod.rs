//! Form validation and the messages shown to users

pub mod error_messages;
pub mod validation;
