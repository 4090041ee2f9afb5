//! Background worker thread — description drafts run here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The worker
//! owns the generator and never touches the lead store. A shared `busy` flag
//! is raised for the length of each generator call.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use realdesk_core::{DescriptionGenerator, DescriptionRequest};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Generate {
        request_id: u64,
        request: DescriptionRequest,
    },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    DescriptionReady { request_id: u64, text: String },
    DescriptionFailed { request_id: u64, error: String },
}

impl WorkerResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            WorkerResponse::DescriptionReady { request_id, .. }
            | WorkerResponse::DescriptionFailed { request_id, .. } => *request_id,
        }
    }
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    generator: Box<dyn DescriptionGenerator>,
    busy: Arc<AtomicBool>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("realdesk-worker".into())
        .spawn(move || worker_loop(rx, tx, generator, busy))
}

/// Ask the worker to stop and wait for it, unless a generator call is still
/// running. That thread is detached instead; its reply has nowhere to go once
/// the TUI drops its receiver. Returns whether the thread was joined.
pub fn shutdown(tx: &Sender<WorkerCommand>, handle: JoinHandle<()>, busy: &AtomicBool) -> bool {
    let _ = tx.send(WorkerCommand::Shutdown);
    if busy.load(Ordering::Relaxed) {
        tracing::info!("description draft still running, not waiting for it");
        return false;
    }
    handle.join().is_ok()
}

fn worker_loop(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    generator: Box<dyn DescriptionGenerator>,
    busy: Arc<AtomicBool>,
) {
    tracing::debug!(generator = generator.name(), "worker started");
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Generate { request_id, request }) => {
                busy.store(true, Ordering::Relaxed);
                let resp = generate(generator.as_ref(), request_id, &request);
                busy.store(false, Ordering::Relaxed);
                if tx.send(resp).is_err() {
                    break;
                }
            }
        }
    }
    tracing::debug!("worker stopped");
}

fn generate(
    generator: &dyn DescriptionGenerator,
    request_id: u64,
    request: &DescriptionRequest,
) -> WorkerResponse {
    match generator.generate(request) {
        Ok(text) => WorkerResponse::DescriptionReady { request_id, text },
        Err(e) => {
            tracing::warn!(request_id, error = %e, "description generation failed");
            WorkerResponse::DescriptionFailed {
                request_id,
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realdesk_core::describe::Unavailable;
    use realdesk_core::DescribeError;
    use std::sync::mpsc;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    struct Echo;

    impl DescriptionGenerator for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn generate(&self, request: &DescriptionRequest) -> Result<String, DescribeError> {
            Ok(format!("{} with {}", request.title, request.features))
        }
    }

    fn request() -> DescriptionRequest {
        DescriptionRequest {
            title: "Loft".into(),
            features: "2 bed".into(),
            tone: None,
        }
    }

    #[test]
    fn worker_answers_then_shuts_down() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let busy = Arc::new(AtomicBool::new(false));
        let handle = spawn_worker(cmd_rx, resp_tx, Box::new(Echo), busy.clone()).unwrap();

        cmd_tx
            .send(WorkerCommand::Generate { request_id: 7, request: request() })
            .unwrap();
        let resp = resp_rx.recv().unwrap();
        assert_eq!(
            resp,
            WorkerResponse::DescriptionReady { request_id: 7, text: "Loft with 2 bed".into() }
        );

        assert!(!busy.load(Ordering::Relaxed));
        assert!(shutdown(&cmd_tx, handle, &busy));
    }

    /// Blocks in `generate` until released, like a slow network call.
    struct Gate {
        started: Mutex<Sender<()>>,
        release: Mutex<Receiver<()>>,
    }

    impl DescriptionGenerator for Gate {
        fn name(&self) -> &str {
            "gate"
        }

        fn generate(&self, _request: &DescriptionRequest) -> Result<String, DescribeError> {
            let _ = self.started.lock().unwrap().send(());
            let _ = self.release.lock().unwrap().recv_timeout(Duration::from_secs(10));
            Ok("late".into())
        }
    }

    #[test]
    fn shutdown_does_not_wait_for_running_draft() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let gate = Gate {
            started: Mutex::new(started_tx),
            release: Mutex::new(release_rx),
        };
        let busy = Arc::new(AtomicBool::new(false));
        let handle = spawn_worker(cmd_rx, resp_tx, Box::new(gate), busy.clone()).unwrap();

        cmd_tx
            .send(WorkerCommand::Generate { request_id: 1, request: request() })
            .unwrap();
        started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(busy.load(Ordering::Relaxed));

        let t0 = Instant::now();
        assert!(!shutdown(&cmd_tx, handle, &busy));
        assert!(t0.elapsed() < Duration::from_secs(1));

        // The detached thread finishes once the call returns.
        drop(resp_rx);
        release_tx.send(()).unwrap();
    }

    #[test]
    fn failure_keeps_request_id() {
        let resp = generate(&Unavailable::new("NO_KEY"), 3, &request());
        assert_eq!(resp.request_id(), 3);
        assert!(matches!(resp, WorkerResponse::DescriptionFailed { .. }));
    }
}
