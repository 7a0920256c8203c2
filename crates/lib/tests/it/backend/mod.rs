//! Storage backend integration tests

mod conformance;
mod file_persistence;
