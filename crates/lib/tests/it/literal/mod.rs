//! Literal reader integration tests
