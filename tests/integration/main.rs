//! Integration test suite, run against a live server.

mod api_tests;
