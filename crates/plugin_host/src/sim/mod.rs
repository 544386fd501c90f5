//! Simulated host environment for driving the controller from a script.
pub mod app;
pub mod cli;
pub mod host;
pub mod logging;
pub mod script;
