//! Command-line front end for the `gwork` binary.

pub mod commands;
