use crate::{ControllerConfig, InvocationCommand, PluginData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Constructed; startup has not run.
    #[default]
    Created,
    Running,
    /// A close request has been issued. Nothing is processed afterwards.
    Closing,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControllerState {
    config: ControllerConfig,
    command: Option<InvocationCommand>,
    plugin_data: Option<PluginData>,
    lifecycle: Lifecycle,
}

impl ControllerState {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn command(&self) -> Option<&InvocationCommand> {
        self.command.as_ref()
    }

    pub fn plugin_data(&self) -> Option<&PluginData> {
        self.plugin_data.as_ref()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_closing(&self) -> bool {
        self.lifecycle == Lifecycle::Closing
    }

    pub(crate) fn start(&mut self, command: Option<InvocationCommand>) {
        self.command = command;
        self.lifecycle = Lifecycle::Running;
    }

    pub(crate) fn set_plugin_data(&mut self, data: PluginData) {
        self.plugin_data = Some(data);
    }

    pub(crate) fn begin_close(&mut self) {
        self.lifecycle = Lifecycle::Closing;
    }
}
