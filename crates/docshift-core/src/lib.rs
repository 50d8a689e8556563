//! # docshift-core
//!
//! Core library for the docshift documentation tool.
//!
//! This library copies a repository's root README into the docs index and
//! relocates every other Markdown file into the docs directory, mirroring
//! each file's path relative to the repository root.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core error types for the docshift library
pub mod error;

/// Configuration file parsing and layout resolution
pub mod config;

/// Markdown discovery and exclusion rules
pub mod scanner;

/// Relocation engine: planning, execution and reporting
pub mod relocate;
