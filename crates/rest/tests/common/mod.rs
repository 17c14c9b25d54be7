//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server over an in-memory store
//! - [`fixtures`] - Test data fixtures
//! - [`failing_store`] - Store that fails every operation

#![allow(dead_code)]

pub mod failing_store;
pub mod fixtures;
pub mod harness;
