use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::core::api::QuoteService;

/// Runs the network calls off the UI thread. Each operation spawns a thread
/// that drives the future on a shared runtime and reports back through the
/// channel; the UI drains completions with `poll_results` every frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn login(&self, service: Arc<QuoteService>, username: String, password: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(service.login(&username, &password));
            let _ = sender.send(TaskResult::LoginFinished(result));
        });
    }

    /// Fetches the quote list for a settled term. The sequence number came
    /// from `QuoteBoard::begin_fetch` and travels with the result so stale
    /// responses can be recognized.
    pub fn fetch_quotes(&self, service: Arc<QuoteService>, term: String, seq: u64) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(service.list_quotes(Some(&term)));
            let _ = sender.send(TaskResult::QuotesFetched { seq, result });
        });
    }

    pub fn cast_vote(&self, service: Arc<QuoteService>, id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(service.cast_vote(&id));
            let _ = sender.send(TaskResult::VoteFinished { id, result });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
