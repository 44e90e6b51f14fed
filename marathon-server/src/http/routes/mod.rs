//! Route handlers organized by resource
//!
//! Collection paths are registered with and without the trailing slash;
//! the web client uses the slashed form.

pub mod achievements;
pub mod auth;
pub mod chatbot;
pub mod exams;
pub mod health;
pub mod lessons;
pub mod statistics;
pub mod students;
pub mod topics;

#[cfg(test)]
pub(crate) mod test_support;
