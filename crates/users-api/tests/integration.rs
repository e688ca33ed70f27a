//! Single integration test target that includes all test modules.

mod common;
