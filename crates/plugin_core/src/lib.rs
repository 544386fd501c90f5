//! Plugin core: pure controller state machine and the UI message protocol.
mod command;
mod config;
mod effect;
mod error;
mod msg;
mod protocol;
mod selection;
mod state;
mod update;

pub use config::{ControllerConfig, UiOptions, DEFAULT_TITLE};
pub use effect::Effect;
pub use error::{ControllerError, SelectionError};
pub use command::InvocationCommand;
pub use msg::Msg;
pub use protocol::{InboundMessage, OutboundMessage};
pub use selection::{NodeRef, PluginData, SelectionSnapshot};
pub use state::{ControllerState, Lifecycle};
pub use update::{update, RUN_ACTION_NOTICE};
