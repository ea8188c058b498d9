//! Integration tests for async extensions.

mod outcome_async_tests;
