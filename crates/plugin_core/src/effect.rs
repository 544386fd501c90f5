/// Host-facing requests produced by [`crate::update`]. All are fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowUi(crate::UiOptions),
    SetSkipInvisibleInstanceChildren(bool),
    PostMessage(crate::OutboundMessage),
    /// Transient, non-blocking toast for the end user.
    Notify(String),
    /// Ask the host to terminate the plugin. Terminal.
    ClosePlugin,
}

impl Effect {
    pub fn is_close(&self) -> bool {
        matches!(self, Effect::ClosePlugin)
    }
}
