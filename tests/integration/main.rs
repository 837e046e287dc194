//! Integration test harness.
//!
//! Compiles the scenario modules under `integration/` into a single test
//! binary sharing one copy of the helpers.

mod helpers;

mod account_test;
mod auth_test;
mod job_test;
