use super::reader::read_data_url;
use super::types::{Command, CycleId, UploadEvent};
use super::widget::UploadWidget;
use std::sync::mpsc::{channel, Receiver, Sender};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tracing::debug;

/// Runs the widget's commands on a tokio runtime and hands the results back
/// through a channel drained on the UI thread.
pub struct UploadDriver {
    runtime: Runtime,
    sender: Sender<UploadEvent>,
    receiver: Receiver<UploadEvent>,
    ticker: Option<(CycleId, JoinHandle<()>)>,
    repaint: Option<egui::Context>,
}

impl UploadDriver {
    pub fn new() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("roomify-upload")
            .enable_all()
            .build()?;
        let (sender, receiver) = channel();
        Ok(Self {
            runtime,
            sender,
            receiver,
            ticker: None,
            repaint: None,
        })
    }

    /// Wakes the egui event loop whenever an event is posted.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn execute(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::StartRead { cycle, file, kind } => {
                    let notify = self.notifier();
                    self.runtime.spawn(async move {
                        let result = read_data_url(file, kind).await;
                        notify.post(UploadEvent::ReadFinished { cycle, result });
                    });
                }
                Command::StartTicker { cycle, interval } => {
                    self.stop_ticker();
                    let notify = self.notifier();
                    let handle = self.runtime.spawn(async move {
                        let mut ticks = tokio::time::interval(interval);
                        // The first tick of a tokio interval completes immediately.
                        ticks.tick().await;
                        loop {
                            ticks.tick().await;
                            if !notify.post(UploadEvent::Tick(cycle)) {
                                break;
                            }
                        }
                    });
                    self.ticker = Some((cycle, handle));
                }
                Command::StopTicker(cycle) => {
                    if matches!(self.ticker, Some((running, _)) if running == cycle) {
                        self.stop_ticker();
                    }
                }
                Command::ScheduleReset { cycle, after } => {
                    let notify = self.notifier();
                    self.runtime.spawn(async move {
                        tokio::time::sleep(after).await;
                        notify.post(UploadEvent::ResetDue(cycle));
                    });
                }
            }
        }
    }

    /// Feeds every pending event into the widget and runs what it asks for.
    /// Returns whether anything was processed.
    pub fn pump(&mut self, widget: &mut UploadWidget) -> bool {
        let mut had_updates = false;
        while let Ok(event) = self.receiver.try_recv() {
            had_updates = true;
            let commands = widget.handle_event(event);
            self.execute(commands);
        }
        had_updates
    }

    fn stop_ticker(&mut self) {
        if let Some((cycle, handle)) = self.ticker.take() {
            debug!(cycle = cycle.0, "Stopping progress ticker");
            handle.abort();
        }
    }

    fn notifier(&self) -> Notifier {
        Notifier {
            sender: self.sender.clone(),
            repaint: self.repaint.clone(),
        }
    }
}

impl Drop for UploadDriver {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

struct Notifier {
    sender: Sender<UploadEvent>,
    repaint: Option<egui::Context>,
}

impl Notifier {
    fn post(&self, event: UploadEvent) -> bool {
        let delivered = self.sender.send(event).is_ok();
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::CandidateFile;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn pump_until(driver: &mut UploadDriver, widget: &mut UploadWidget, done: impl Fn(&UploadWidget) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !done(widget) {
            assert!(Instant::now() < deadline, "timed out: {:?}", widget.state());
            driver.pump(widget);
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn full_cycle_completes_and_resets() {
        let completed = Rc::new(RefCell::new(Vec::new()));
        let sink = completed.clone();
        let mut widget =
            UploadWidget::new(|| true).on_complete(move |url| sink.borrow_mut().push(url.to_string()));
        let mut driver = UploadDriver::new().unwrap();

        let file = CandidateFile::from_bytes("plan.png", None, Arc::from(b"png".to_vec()));
        let commands = widget.select_files(vec![file]);
        driver.execute(commands);

        pump_until(&mut driver, &mut widget, |_| !completed.borrow().is_empty());
        assert_eq!(widget.state().progress, 100);
        assert_eq!(*completed.borrow(), vec!["data:image/png;base64,cG5n".to_string()]);

        pump_until(&mut driver, &mut widget, |w| w.state().is_idle());
        assert_eq!(completed.borrow().len(), 1);
    }

    #[test]
    fn unreadable_file_returns_to_idle() {
        let mut widget = UploadWidget::new(|| true);
        let mut driver = UploadDriver::new().unwrap();

        let path = std::env::temp_dir().join("roomify-driver-missing.jpg");
        let commands = widget.select_files(vec![CandidateFile::from_path(path)]);
        assert!(!widget.state().is_idle());
        driver.execute(commands);

        pump_until(&mut driver, &mut widget, |w| w.state().is_idle());
        assert!(driver.ticker.is_none());
    }
}
