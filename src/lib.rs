//! Stateless core logic for the Matchbook dating prospect tracker.
//!
//! The [`prospects`] module holds the portable library surface: trait and
//! prospect data shapes, the compatibility scorer, the archive retention
//! calculator, and the in-app prompt generator. Everything is a pure function
//! of its inputs; persistence and UI concerns stay with the caller.

pub mod config;
pub mod error;
pub mod prospects;
pub mod telemetry;
