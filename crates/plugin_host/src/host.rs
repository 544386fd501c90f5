use plugin_core::{OutboundMessage, SelectionSnapshot, UiOptions};

/// The host document API, as seen from the controller.
///
/// Every command is fire-and-forget: the controller never waits for, or
/// observes, the outcome.
pub trait Host {
    /// Menu command the plugin was launched with, if any.
    fn command(&self) -> Option<String>;

    fn show_ui(&mut self, options: &UiOptions);

    fn set_skip_invisible_instance_children(&mut self, skip: bool);

    /// Point-in-time read of the current page selection.
    fn current_selection(&self) -> SelectionSnapshot;

    fn notify(&mut self, message: &str);

    fn close_plugin(&mut self);
}

/// Outbound half of the channel to the sandboxed UI surface.
pub trait UiChannel {
    fn post_message(&mut self, message: &OutboundMessage);
}
