//! Test suite for the calendar backend
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
pub mod property;
