//! # Connect Four
//!
//! A Connect Four rules engine with a computer opponent. The hardest
//! opponent runs a depth-bounded minimax search with alpha-beta pruning over
//! a run-counting heuristic; easier tiers mix in uniformly random moves.
//! Rendering and input handling are left to the front-end, which drives a
//! [`game::GameState`] through its public operations.
//!
//! ## Modules
//!
//! - [`game`] — Board, tokens and players, line scanner, game state
//! - [`ai`] — Heuristic, minimax search, random play, difficulty policy
//! - [`selfplay`] — Computer-vs-computer matches between difficulty tiers
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod selfplay;
