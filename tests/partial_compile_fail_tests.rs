//! Compile-fail tests for the partial! macro.
//!
//! These tests verify that placeholder tokens outside `_1`..`_8` and `__`
//! are rejected at compile time. Calls with the wrong number of unbound
//! arguments are covered by the `compile_fail` examples on `partial!`.
//!
//! Note: trybuild tests use #[test] as an exception because
//! trybuild's standard usage pattern requires it.

#![cfg(feature = "partial")]

#[test]
fn partial_compile_fail_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.compile_fail("tests/compile_fail/partial_*.rs");
}
