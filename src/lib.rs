//! # Connect Four
//!
//! A two-player Connect Four rules engine with a terminal front end built
//! with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, line scanner, win
//!   evaluation, session state machine
//! - [`report`] — Serializable move outcomes for scripted play
//! - [`ui`] — Terminal UI: interactive game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod report;
pub mod ui;
