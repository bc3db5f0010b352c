//! Steiner Space Travel CLI library.
//!
//! This crate provides command-line interface utilities for the route
//! planner, currently the output formatting shared by the subcommands.

pub mod output;
