use std::io::Write;

use anyhow::Context;
use plugin_core::ControllerConfig;
use plugin_host::{Controller, EventQueue, EventSender, RunSummary};
use plugin_logging::{plugin_info, plugin_warn};
use serde_json::Value;

use super::cli::Cli;
use super::host::{JsonLinesUi, SharedSelection, SimulatedHost};
use super::script::{self, Step};

/// Replays the script named by `cli`. Host requests are written to
/// `host_out` and UI posts to `ui_out`.
pub fn run<H: Write, U: Write>(cli: &Cli, host_out: H, ui_out: U) -> anyhow::Result<RunSummary> {
    let config = match &cli.config {
        Some(path) => script::load_config(path)?,
        None => ControllerConfig::default(),
    };
    let steps = script::load_script(&cli.script)?;

    let selection = SharedSelection::default();
    let host = SimulatedHost::new(cli.command.clone(), selection.clone(), host_out);
    let ui = JsonLinesUi::new(ui_out);
    let (sender, queue) = EventQueue::channel();

    let mut controller = Controller::new(config, host, ui, queue);
    controller.start().context("controller startup failed")?;

    for (index, step) in steps.into_iter().enumerate() {
        if controller.is_closed() {
            plugin_info!("Plugin closed; skipping remaining script steps");
            break;
        }
        replay_step(&sender, &selection, step);
        controller
            .run_pending()
            .with_context(|| format!("controller faulted at script step {}", index + 1))?;
    }

    drop(sender);
    let summary = controller.run()?;
    plugin_info!(
        "Session done: {} event(s), {} message(s) posted, {} notification(s), closed={}",
        summary.events_handled,
        summary.messages_posted,
        summary.notifications,
        summary.closed
    );
    Ok(summary)
}

fn replay_step(sender: &EventSender, selection: &SharedSelection, step: Step) {
    let delivered = match step {
        Step::Select(nodes) => {
            selection.replace(nodes);
            sender.selection_changed()
        }
        Step::Deselect => {
            selection.replace(Vec::new());
            sender.selection_changed()
        }
        Step::Ui(text) => {
            // The UI may post any value; non-JSON text arrives as a plain string.
            let payload = serde_json::from_str(&text).unwrap_or(Value::String(text));
            sender.ui_message(payload)
        }
    };
    if !delivered {
        plugin_warn!("Event queue closed; step dropped");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::path::PathBuf;
    use std::rc::Rc;

    use tempfile::NamedTempFile;

    use super::super::logging::LogDestination;
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl SharedBuf {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.borrow().clone())
                .unwrap()
                .lines()
                .map(ToOwned::to_owned)
                .collect()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn cli_for(script: PathBuf) -> Cli {
        Cli {
            script,
            command: Some("openPlugin".to_string()),
            config: None,
            log: LogDestination::Terminal,
        }
    }

    fn write_script(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn steps_after_close_are_skipped() {
        let script = write_script(
            r#"[
                Select([(id: "1:1", type: "FRAME")]),
                Ui("not json at all"),
                Ui("{\"type\":\"runAction\"}"),
                Ui("{\"type\":\"closePlugin\"}"),
                Select([(id: "1:2", type: "TEXT")]),
                Deselect,
            ]"#,
        );
        let out = SharedBuf::default();

        let summary = run(&cli_for(script.path().to_path_buf()), out.clone(), out.clone()).unwrap();

        assert_eq!(
            out.lines(),
            vec![
                "ui: \"Selection Plugin\" 400x200 (theme colors)",
                "post: {\"data\":\"FRAME\",\"type\":\"selectionData\"}",
                "notify: Run has run!",
                "close",
            ]
        );
        assert_eq!(
            summary,
            RunSummary {
                events_handled: 4,
                messages_posted: 1,
                notifications: 1,
                closed: true,
            }
        );
    }

    #[test]
    fn deselect_faults_with_step_context() {
        let script = write_script(
            r#"[
                Select([(id: "1:1", type: "FRAME")]),
                Deselect,
                Ui("{\"type\":\"runAction\"}"),
            ]"#,
        );
        let out = SharedBuf::default();

        let err = run(&cli_for(script.path().to_path_buf()), out.clone(), out.clone()).unwrap_err();

        assert!(format!("{err:#}").contains("controller faulted at script step 2"));
        assert!(!out.lines().iter().any(|line| line.starts_with("notify")));
    }

    #[test]
    fn demo_session_replays_until_close() {
        let script = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/session.ron");
        let host_out = SharedBuf::default();
        let ui_out = SharedBuf::default();

        let summary = run(&cli_for(script), host_out.clone(), ui_out.clone()).unwrap();

        assert_eq!(
            ui_out.lines(),
            vec![
                "post: {\"data\":\"FRAME\",\"type\":\"selectionData\"}",
                "post: {\"data\":\"TEXT\",\"type\":\"selectionData\"}",
                "post: {\"data\":\"COMPONENT\",\"type\":\"selectionData\"}",
            ]
        );
        assert_eq!(host_out.lines().last().map(String::as_str), Some("close"));
        assert!(summary.closed);
        assert_eq!(summary.notifications, 1);
    }
}
