#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host launched the controller, optionally with a menu command.
    Started {
        command: Option<crate::InvocationCommand>,
    },
    /// Host reported a selection change; carries the snapshot read for it.
    SelectionChanged(crate::SelectionSnapshot),
    /// UI surface posted a message.
    UiMessage(crate::InboundMessage),
}
