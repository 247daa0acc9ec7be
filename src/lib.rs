//! # Studyboard
//!
//! Engines behind the Studyboard study planner's drag-and-drop canvas and
//! chat search, with a small CLI (`sboard`) for running them over files.
//!
//! The algorithms live in [`studyboard_core`]; this crate adds
//! configuration, logging, and file loading.
//!
//! ## Quick Start
//!
//! ```bash
//! sboard guides board.json cmu --threshold 8
//! sboard search chat.json "robotics lab" --step 2
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`logging`] | tracing subscriber setup |
//! | [`board`] | Canvas boards and alignment guides |
//! | [`transcript`] | Conversation transcripts and search |

pub mod board;
pub mod config;
pub mod logging;
pub mod transcript;
