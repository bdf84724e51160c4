//! # Connect Four TUI
//!
//! A terminal Connect Four game against a scripted computer opponent.
//! The opponent plays a fixed priority list of rules (win, block, cover
//! threats, take the center, otherwise random) with one ply of lookahead.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, turn state machine
//! - [`ai`] — The rule-based computer opponent
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
