//! The `utils` module provides a collection of utility functions and common
//! definitions used across the `uci-diag` tools.
//!
//! This module aims to centralize reusable components, such as custom error types,
//! to promote code consistency and reduce duplication.

pub mod error;
