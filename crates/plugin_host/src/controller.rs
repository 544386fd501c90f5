use plugin_core::{
    update, ControllerConfig, ControllerError, ControllerState, InboundMessage, InvocationCommand,
    Lifecycle, Msg,
};
use plugin_logging::{plugin_debug, plugin_error, plugin_info, set_event_seq};

use crate::{EffectRunner, EventQueue, Host, HostEvent, Subscription, UiChannel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub events_handled: u64,
    pub messages_posted: usize,
    pub notifications: usize,
    pub closed: bool,
}

/// Owns the controller state and wires it to the host, the UI channel and
/// the host's event queue.
///
/// Everything runs on the caller's thread, one event at a time.
pub struct Controller<H, U> {
    state: ControllerState,
    host: H,
    ui: U,
    queue: EventQueue,
    runner: EffectRunner,
    // Held for the controller's lifetime; never unsubscribed.
    subscriptions: Vec<Subscription>,
    events_handled: u64,
}

impl<H: Host, U: UiChannel> Controller<H, U> {
    pub fn new(config: ControllerConfig, host: H, ui: U, queue: EventQueue) -> Self {
        Self {
            state: ControllerState::new(config),
            host,
            ui,
            queue,
            runner: EffectRunner::new(),
            subscriptions: Vec::new(),
            events_handled: 0,
        }
    }

    /// Shows the UI, applies the startup command branch and subscribes to
    /// selection changes and UI messages. Only the first call has any effect.
    pub fn start(&mut self) -> Result<(), ControllerError> {
        if self.state.lifecycle() != Lifecycle::Created {
            plugin_debug!("Controller already started");
            return Ok(());
        }
        set_event_seq(0);
        let command = self.host.command().as_deref().map(InvocationCommand::parse);
        self.apply(Msg::Started { command })?;

        self.subscriptions.push(self.queue.on_selection_change());
        self.subscriptions.push(self.queue.on_ui_message());
        Ok(())
    }

    /// Handles every event already queued, then returns.
    pub fn run_pending(&mut self) -> Result<(), ControllerError> {
        while !self.is_closed() {
            let Some(event) = self.queue.try_recv() else {
                break;
            };
            self.handle_event(event)?;
        }
        Ok(())
    }

    /// Handles events until the plugin closes or the host drops the queue.
    pub fn run(&mut self) -> Result<RunSummary, ControllerError> {
        while !self.is_closed() {
            let Some(event) = self.queue.recv() else {
                break;
            };
            self.handle_event(event)?;
        }
        let summary = self.summary();
        plugin_info!("Controller finished: {:?}", summary);
        Ok(summary)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            events_handled: self.events_handled,
            messages_posted: self.runner.messages_posted(),
            notifications: self.runner.notifications(),
            closed: self.runner.close_requested(),
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn is_closed(&self) -> bool {
        self.runner.close_requested()
    }

    fn handle_event(&mut self, event: HostEvent) -> Result<(), ControllerError> {
        self.events_handled += 1;
        set_event_seq(self.events_handled);

        let msg = match event {
            HostEvent::SelectionChanged => Msg::SelectionChanged(self.host.current_selection()),
            HostEvent::UiMessage(payload) => Msg::UiMessage(InboundMessage::from_value(&payload)),
        };
        self.apply(msg)
    }

    /// A failed update leaves the current state in place; only the failing
    /// event is lost.
    fn apply(&mut self, msg: Msg) -> Result<(), ControllerError> {
        let (state, effects) = update(self.state.clone(), msg).inspect_err(|err| {
            plugin_error!("Unhandled controller fault: {}", err);
        })?;
        self.state = state;
        self.runner.execute(&mut self.host, &mut self.ui, effects);
        Ok(())
    }
}
