//! Plugin host shell: collaborator traits, event subscriptions and the
//! controller event loop that drives `plugin_core::update`.
mod controller;
mod effects;
mod events;
mod host;

pub use controller::{Controller, RunSummary};
pub use effects::EffectRunner;
pub use events::{EventKind, EventQueue, EventSender, HostEvent, Subscription};
pub use host::{Host, UiChannel};
