//! Testing utilities for Nebula
//!
//! This crate provides:
//! - [`RecordingExecutor`]: a [`CommandExecutor`](nebula_ui::CommandExecutor)
//!   that records commands instead of drawing them
//! - [`fixtures`]: a small galaxy HUD (workspace, node tree, viewport) shared by
//!   tests, benches and demos

pub mod fixtures;
pub mod recording;

pub use recording::{RecordingExecutor, save_restore_balanced};
