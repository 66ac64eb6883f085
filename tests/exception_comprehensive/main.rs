//! Exception Integration Test Suite
//!
//! Exercises the public API of the facade crate end to end.
//!
//! ## Modules
//!
//! - `representations`: construction, accessors, display and promotion
//! - `merge`: join and flattening of causes
//! - `matching`: `is`, `cast_into` and cause-tree search
//! - `stack`: stack capture contract
//! - `bridge`: raise, recover and catch
//! - `logging`: structured events
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test exception_comprehensive
//!
//! # One module
//! cargo test --test exception_comprehensive merge::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod bridge;
mod matching;
mod merge;
mod representations;
mod stack;
