//! Core types for datefix: errors, configuration, tracing setup, the
//! date-fragment parser and the static table descriptors.

pub mod config;
pub mod date;
pub mod errors;
pub mod tables;
pub mod tracing;

pub use date::{canonicalize, parse_fragment, DateFragment, FieldOrder};
pub use tables::{TableDescriptor, TABLES};
