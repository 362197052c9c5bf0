use std::sync::mpsc::Sender;
use std::thread;

use anyhow::Result;
use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::task::{SubmitResponse, TaskSubmission};

/// Sends task submissions to the master node.
#[derive(Debug, Clone)]
pub struct Submitter {
    client: Client,
    submit_url: String,
}

impl Submitter {
    pub fn new(submit_url: String) -> Self {
        Self {
            client: Client::new(),
            submit_url,
        }
    }

    pub fn submit_url(&self) -> &str {
        &self.submit_url
    }

    /// Sends one task and returns the response `message`.
    ///
    /// The HTTP status code is not inspected: the body is parsed as JSON
    /// either way, so a non-2xx response carrying a `message` field reads
    /// like a normal outcome. A body without a `message` field is a failure.
    pub fn submit(&self, id: &str) -> Result<String> {
        let body = TaskSubmission::new(id.to_string());
        let response = self.client.post(&self.submit_url).json(&body).send()?;
        let parsed: SubmitResponse = response.json()?;
        Ok(parsed.message)
    }
}

/// Runs one submission on its own thread and reports the outcome over `tx`.
/// Each call is independent; rapid submissions run concurrently with no
/// ordering guarantee between their completions.
pub fn spawn_submit(submitter: Submitter, id: String, tx: Sender<Result<String>>) {
    thread::spawn(move || {
        info!(task_id = %id, "submitting task");
        let outcome = submitter.submit(&id);
        match &outcome {
            Ok(message) => info!(task_id = %id, %message, "task submitted"),
            Err(err) => warn!(task_id = %id, error = %err, "task submission failed"),
        }
        // The receiver is gone if the UI quit while this was in flight.
        let _ = tx.send(outcome);
    });
}
