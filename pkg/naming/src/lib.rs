//! Resource-name handling for cluster objects.
//!
//! [`sanitize_name`] turns arbitrary strings (filenames, hostnames,
//! identifiers) into names made of lowercase letters, digits and hyphens
//! that start and end with a letter. [`validate_name`] checks a name
//! against the resource-name rules without changing it.

pub mod config;
pub mod kebab;
pub mod sanitize;
pub mod validate;

pub use kebab::kebab_case;
pub use sanitize::sanitize_name;
pub use validate::{is_valid_name, validate_name};
