//! Cryptgate - One-time token handoff service
//!
//! This crate implements a session-bound, single-use shared-secret workflow:
//! the server mints a short-lived token, the client echoes it back within a
//! bounded window, and the accompanying payload is accepted exactly once
//! before being handed to a downstream text-processing script.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
