//! Pokedex Library
//!
//! This module exposes the cache, pagination, API, and REPL layers for use
//! in integration tests.

pub mod api;
pub mod cache;
pub mod cli;
pub mod pagination;
pub mod pokedex;
pub mod repl;
