// Clipboard writes run off the event loop thread; the outcome comes back
// over the same channel the loop already drains.

use crossbeam_channel::Sender;
use std::sync::Arc;
use std::thread;

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::event::AppMsg;

pub struct CopyWorker {
    tx: Sender<AppMsg>,
    sink: Arc<dyn ClipboardSink>,
}

impl CopyWorker {
    pub fn new(tx: Sender<AppMsg>) -> Self {
        Self::with_sink(tx, Arc::new(SystemClipboard))
    }

    pub fn with_sink(tx: Sender<AppMsg>, sink: Arc<dyn ClipboardSink>) -> Self {
        Self { tx, sink }
    }

    /// Write `snippet` in the background; exactly one `CopyCompleted` or
    /// `CopyFailed` is sent per request.
    pub fn request(&self, style_id: &'static str, snippet: String) {
        let tx = self.tx.clone();
        let sink = Arc::clone(&self.sink);

        thread::spawn(move || {
            let msg = match sink.write_text(&snippet) {
                Ok(()) => AppMsg::CopyCompleted { style_id, snippet },
                Err(e) => AppMsg::CopyFailed {
                    style_id,
                    error: format!("{:#}", e),
                },
            };
            let _ = tx.send(msg);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use crossbeam_channel::unbounded;
    use std::sync::Mutex;
    use std::time::Duration;

    struct RecordingSink {
        writes: Mutex<Vec<String>>,
    }

    impl ClipboardSink for RecordingSink {
        fn write_text(&self, text: &str) -> Result<()> {
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct FailingSink;

    impl ClipboardSink for FailingSink {
        fn write_text(&self, _text: &str) -> Result<()> {
            Err(anyhow!("clipboard unavailable"))
        }
    }

    #[test]
    fn successful_write_reports_completion_with_exact_payload() {
        let (tx, rx) = unbounded();
        let sink = Arc::new(RecordingSink {
            writes: Mutex::new(Vec::new()),
        });
        let worker = CopyWorker::with_sink(tx, sink.clone());

        worker.request("crosshair", "cursor: crosshair;".to_string());

        let msg = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        match msg {
            AppMsg::CopyCompleted { style_id, snippet } => {
                assert_eq!(style_id, "crosshair");
                assert_eq!(snippet, "cursor: crosshair;");
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(
            *sink.writes.lock().unwrap(),
            vec!["cursor: crosshair;".to_string()]
        );
    }

    #[test]
    fn failed_write_reports_failure() {
        let (tx, rx) = unbounded();
        let worker = CopyWorker::with_sink(tx, Arc::new(FailingSink));

        worker.request("wait", "cursor: wait;".to_string());

        let msg = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        match msg {
            AppMsg::CopyFailed { style_id, error } => {
                assert_eq!(style_id, "wait");
                assert!(error.contains("clipboard unavailable"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
