//! Centralized constants for the kname project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod naming;
pub mod paths;
