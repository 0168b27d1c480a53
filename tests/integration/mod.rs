//! Integration tests

#[cfg(feature = "ssr")]
mod api;
mod client_test;
#[cfg(feature = "ssr")]
mod config_test;
#[cfg(feature = "ssr")]
mod database;
