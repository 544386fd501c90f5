use plugin_logging::{plugin_debug, plugin_info, plugin_trace};

use crate::{
    ControllerError, ControllerState, Effect, InboundMessage, InvocationCommand, Lifecycle, Msg,
    OutboundMessage, PluginData, SelectionSnapshot,
};

/// Text of the user notification shown after `runAction`.
pub const RUN_ACTION_NOTICE: &str = "Run has run!";

/// Pure update function: applies a message to state and returns any effects.
///
/// The only failure is reading the type of the first node of an empty
/// selection. The error is returned to the caller unhandled.
pub fn update(
    mut state: ControllerState,
    msg: Msg,
) -> Result<(ControllerState, Vec<Effect>), ControllerError> {
    let effects = match (state.lifecycle(), msg) {
        (Lifecycle::Closing, msg) => {
            plugin_trace!("Dropping {:?} after close request", msg);
            Vec::new()
        }
        (Lifecycle::Created, Msg::Started { command }) => startup(&mut state, command),
        (Lifecycle::Running, Msg::Started { .. }) => {
            plugin_debug!("Ignoring repeated startup");
            Vec::new()
        }
        (Lifecycle::Running, Msg::SelectionChanged(snapshot)) => {
            selection_changed(&mut state, &snapshot)?
        }
        (Lifecycle::Running, Msg::UiMessage(inbound)) => dispatch(&mut state, inbound),
        (Lifecycle::Created, msg) => {
            plugin_debug!("Dropping {:?} before startup", msg);
            Vec::new()
        }
    };

    Ok((state, effects))
}

fn startup(state: &mut ControllerState, command: Option<InvocationCommand>) -> Vec<Effect> {
    let config = state.config().clone();
    plugin_info!("{} starting (command={:?})", config.ui.title, command);

    let mut effects = vec![
        Effect::ShowUi(config.ui),
        Effect::SetSkipInvisibleInstanceChildren(config.skip_invisible_instance_children),
    ];

    match &command {
        Some(InvocationCommand::OpenPlugin) => {
            plugin_info!("Opened from the plugin menu");
        }
        Some(InvocationCommand::QuickAction) => {
            plugin_info!("Quick action requested; closing immediately");
            effects.push(Effect::ClosePlugin);
        }
        Some(InvocationCommand::Other(_)) | None => {}
    }

    state.start(command);
    if effects.iter().any(Effect::is_close) {
        state.begin_close();
    }
    effects
}

fn selection_changed(
    state: &mut ControllerState,
    snapshot: &SelectionSnapshot,
) -> Result<Vec<Effect>, ControllerError> {
    let node_type = snapshot.first_node_type()?;
    plugin_debug!(
        "Selection changed: {} node(s), first type {}",
        snapshot.len(),
        node_type
    );

    let data = PluginData::new(node_type);
    state.set_plugin_data(data.clone());
    Ok(vec![Effect::PostMessage(OutboundMessage::SelectionData {
        data,
    })])
}

fn dispatch(state: &mut ControllerState, inbound: InboundMessage) -> Vec<Effect> {
    match inbound {
        InboundMessage::RunAction => {
            // Placeholder action: no document mutation yet.
            plugin_info!("Run has run!");
            vec![Effect::Notify(RUN_ACTION_NOTICE.to_string())]
        }
        InboundMessage::ClosePlugin => {
            plugin_info!("Closing plugin");
            state.begin_close();
            vec![Effect::ClosePlugin]
        }
        InboundMessage::Unknown { discriminator } => {
            plugin_trace!("Ignoring UI message with type {:?}", discriminator);
            Vec::new()
        }
    }
}
