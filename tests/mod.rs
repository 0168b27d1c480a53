//! Test suite for Sekolah Beta
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
