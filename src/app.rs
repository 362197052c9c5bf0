use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::Result;
use chrono::Local;

use crate::submit::{spawn_submit, Submitter};

/// Popup content shown after a submission settles, success or failure.
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub at: String,
}

impl Notification {
    fn from_outcome(outcome: Result<String>) -> Self {
        let text = match outcome {
            Ok(message) => message,
            Err(err) => format!("Error: {err:#}"),
        };
        Self {
            text,
            at: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

pub struct App {
    pub input: String,
    pub notification: Option<Notification>,
    pub in_flight: usize,
    tx: Sender<Result<String>>,
    rx: Receiver<Result<String>>,
}

impl App {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            input: String::new(),
            notification: None,
            in_flight: 0,
            tx,
            rx,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Sends the current buffer as one submission. The buffer is left as-is,
    /// like a form that keeps its field populated after submit.
    pub fn submit(&mut self, submitter: &Submitter) {
        spawn_submit(submitter.clone(), self.input.clone(), self.tx.clone());
        self.in_flight += 1;
    }

    /// Surfaces completed submissions; the latest one wins the popup.
    pub fn drain_completions(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.in_flight -= 1;
            self.notification = Some(Notification::from_outcome(outcome));
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
