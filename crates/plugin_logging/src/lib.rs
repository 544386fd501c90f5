#![deny(missing_docs)]
//! Shared logging utilities for the plugin workspace.
//!
//! This crate provides the `plugin_*` logging macros used by the controller
//! and its host shell, plus a minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Sequence number of the host event currently being handled on this thread.
    static EVENT_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Sets the sequence number of the host event being handled on this thread.
/// The controller's event loop calls this once per dequeued event.
pub fn set_event_seq(seq: u64) {
    EVENT_SEQ.with(|v| v.set(seq));
}

/// Retrieves the sequence number of the host event being handled.
/// Returns 0 during startup, before any event has been dequeued.
pub fn event_seq() -> u64 {
    EVENT_SEQ.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! plugin_trace {
    ($($arg:tt)*) => {{
        log::trace!("[ev {}] {}", $crate::event_seq(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! plugin_debug {
    ($($arg:tt)*) => {{
        log::debug!("[ev {}] {}", $crate::event_seq(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! plugin_info {
    ($($arg:tt)*) => {{
        log::info!("[ev {}] {}", $crate::event_seq(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! plugin_warn {
    ($($arg:tt)*) => {{
        log::warn!("[ev {}] {}", $crate::event_seq(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! plugin_error {
    ($($arg:tt)*) => {{
        log::error!("[ev {}] {}", $crate::event_seq(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have installed the logger already.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
