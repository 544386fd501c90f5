use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use plugin_core::{NodeRef, OutboundMessage, SelectionSnapshot, UiOptions};
use plugin_host::{Host, UiChannel};
use plugin_logging::{plugin_info, plugin_warn};

/// Page selection shared between the script driver and the simulated host.
#[derive(Debug, Clone, Default)]
pub struct SharedSelection(Rc<RefCell<Vec<NodeRef>>>);

impl SharedSelection {
    pub fn replace(&self, nodes: Vec<NodeRef>) {
        *self.0.borrow_mut() = nodes;
    }

    fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot::new(self.0.borrow().clone())
    }
}

/// Host stand-in that keeps the selection in memory and writes every
/// user-facing request to `out` as a line of text.
pub struct SimulatedHost<W> {
    command: Option<String>,
    selection: SharedSelection,
    out: W,
}

impl<W: Write> SimulatedHost<W> {
    pub fn new(command: Option<String>, selection: SharedSelection, out: W) -> Self {
        Self {
            command,
            selection,
            out,
        }
    }

    fn emit(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}") {
            plugin_warn!("Simulated host output failed: {}", err);
        }
    }
}

impl<W: Write> Host for SimulatedHost<W> {
    fn command(&self) -> Option<String> {
        self.command.clone()
    }

    fn show_ui(&mut self, options: &UiOptions) {
        let line = format!(
            "ui: {:?} {}x{}{}",
            options.title,
            options.width,
            options.height,
            if options.theme_colors { " (theme colors)" } else { "" }
        );
        self.emit(&line);
    }

    fn set_skip_invisible_instance_children(&mut self, skip: bool) {
        plugin_info!("skipInvisibleInstanceChildren = {}", skip);
    }

    fn current_selection(&self) -> SelectionSnapshot {
        self.selection.snapshot()
    }

    fn notify(&mut self, message: &str) {
        self.emit(&format!("notify: {message}"));
    }

    fn close_plugin(&mut self) {
        self.emit("close");
    }
}

/// UI surface stand-in that prints each outbound message as one JSON line.
pub struct JsonLinesUi<W> {
    out: W,
}

impl<W: Write> JsonLinesUi<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> UiChannel for JsonLinesUi<W> {
    fn post_message(&mut self, message: &OutboundMessage) {
        // Delivery failures are not reported back to the controller.
        if let Err(err) = writeln!(self.out, "post: {}", message.to_value()) {
            plugin_warn!("UI post failed: {}", err);
        }
    }
}
