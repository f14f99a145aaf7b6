//! Platform-independent page logic.

pub mod animation;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod controller;
pub mod export;
pub mod format;
pub mod modal;
pub mod nav;
pub mod progress;
pub mod scheduler;
pub mod storage;
pub mod timing;
pub mod toast;

pub use controller::{Command, Effect, PageController};
