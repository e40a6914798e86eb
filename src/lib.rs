//! Colour Clicker (workspace facade crate).
//!
//! This package re-exports the member crates under one
//! `colour_clicker::{core,input,term,types}` path and hosts the terminal
//! front end glue ([`app`]) and runtime configuration ([`config`]).

pub use colour_clicker_core as core;
pub use colour_clicker_input as input;
pub use colour_clicker_term as term;
pub use colour_clicker_types as types;

pub mod app;
pub mod config;
