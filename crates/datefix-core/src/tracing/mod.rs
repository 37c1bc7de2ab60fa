//! Logging for datefix.
//! `tracing` crate with `EnvFilter`, configured through `DATEFIX_LOG`.

pub mod setup;

pub use setup::init_tracing;
