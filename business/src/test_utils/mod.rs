//! Test doubles shared by the use-case tests.
//!
//! `mocks` holds mockall doubles of every port, `in_memory` a stateful shop
//! store for multi-step lifecycle scenarios, `fixtures` ready-made entities.

pub mod fixtures;
pub mod in_memory;
pub mod mocks;

pub use fixtures::*;
pub use in_memory::*;
pub use mocks::*;
