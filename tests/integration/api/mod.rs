//! HTTP API integration tests

mod envelope_test;
