#![forbid(unsafe_code)]

//! Core types for the segmented pincode control.
//!
//! This crate holds the pieces that are independent of any particular
//! control: the canonical input event types consumed by the state
//! machine, and the environment classification that decides between the
//! desktop (one character per cell) and touch (single merged cell)
//! input models.

pub mod environment;
pub mod event;

pub use environment::Environment;
pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
