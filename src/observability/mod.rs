//! Observability subsystem.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the binary through [`logging::init`].

pub mod logging;
