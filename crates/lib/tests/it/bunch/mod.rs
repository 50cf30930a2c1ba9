//! Bunch integration tests
//!
//! Tests are organized by concern: path access, rendering, summaries,
//! copies and persistence.

mod copy_tests;
mod nested_tests;
mod persist_tests;
mod render_tests;
mod summary_tests;
