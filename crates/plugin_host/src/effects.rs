use plugin_core::Effect;
use plugin_logging::{plugin_debug, plugin_info};

use crate::{Host, UiChannel};

/// Executes effects against the host and UI collaborators, counting what it sent.
#[derive(Debug, Default)]
pub struct EffectRunner {
    messages_posted: usize,
    notifications: usize,
    close_requested: bool,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute<H, U>(&mut self, host: &mut H, ui: &mut U, effects: Vec<Effect>)
    where
        H: Host + ?Sized,
        U: UiChannel + ?Sized,
    {
        for effect in effects {
            match effect {
                Effect::ShowUi(options) => {
                    plugin_debug!(
                        "ShowUi title={:?} {}x{} theme_colors={}",
                        options.title,
                        options.width,
                        options.height,
                        options.theme_colors
                    );
                    host.show_ui(&options);
                }
                Effect::SetSkipInvisibleInstanceChildren(skip) => {
                    host.set_skip_invisible_instance_children(skip);
                }
                Effect::PostMessage(message) => {
                    ui.post_message(&message);
                    self.messages_posted += 1;
                }
                Effect::Notify(text) => {
                    host.notify(&text);
                    self.notifications += 1;
                }
                Effect::ClosePlugin => {
                    plugin_info!("Requesting plugin close");
                    host.close_plugin();
                    self.close_requested = true;
                    // No code runs after a close request.
                    break;
                }
            }
        }
    }

    pub fn messages_posted(&self) -> usize {
        self.messages_posted
    }

    pub fn notifications(&self) -> usize {
        self.notifications
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}
