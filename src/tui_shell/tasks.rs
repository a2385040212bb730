//! Network calls run on worker threads; results come back over a channel and
//! are applied by the event loop between frames.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::editor::{FlatAds, GridAds, Posts, RecordApi};
use crate::error::ConsoleResult;
use crate::model::{FlatAd, GridAd, Post, RecordId};
use crate::remote::RemoteClient;

use super::ViewKind;

#[derive(Clone, Debug)]
pub(super) enum SaveRequest {
    Flat { id: RecordId, title: String },
    Grid { id: RecordId, title: String },
    Post { id: RecordId, image_url: String },
}

impl SaveRequest {
    pub(super) fn id(&self) -> &RecordId {
        match self {
            SaveRequest::Flat { id, .. }
            | SaveRequest::Grid { id, .. }
            | SaveRequest::Post { id, .. } => id,
        }
    }

    pub(super) fn value(&self) -> &str {
        match self {
            SaveRequest::Flat { title, .. } | SaveRequest::Grid { title, .. } => title,
            SaveRequest::Post { image_url, .. } => image_url,
        }
    }
}

#[derive(Debug)]
pub(super) enum TaskResult {
    Verified(ConsoleResult<()>),
    LoggedIn {
        user: String,
        result: ConsoleResult<String>,
    },
    FlatLoaded(ConsoleResult<Vec<FlatAd>>),
    GridLoaded(ConsoleResult<Vec<GridAd>>),
    PostsLoaded(ConsoleResult<Vec<Post>>),
    Saved {
        request: SaveRequest,
        result: ConsoleResult<()>,
    },
}

/// A finished task tagged with the mount epoch it was issued under.
#[derive(Debug)]
pub(super) struct TaskEnvelope {
    pub(super) epoch: u64,
    pub(super) label: &'static str,
    pub(super) result: TaskResult,
}

pub(super) struct TaskRunner {
    tx: Sender<TaskEnvelope>,
    rx: Receiver<TaskEnvelope>,
    in_flight: usize,
}

impl Default for TaskRunner {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            in_flight: 0,
        }
    }
}

impl TaskRunner {
    pub(super) fn spawn(
        &mut self,
        epoch: u64,
        label: &'static str,
        job: impl FnOnce() -> TaskResult + Send + 'static,
    ) {
        let tx = self.tx.clone();
        self.in_flight += 1;
        tracing::debug!(epoch, label, "task started");
        std::thread::spawn(move || {
            let result = job();
            // The receiver only goes away when the console exits.
            let _ = tx.send(TaskEnvelope {
                epoch,
                label,
                result,
            });
        });
    }

    /// Everything that finished since the last call, without blocking.
    pub(super) fn drain(&mut self) -> Vec<TaskEnvelope> {
        let done: Vec<TaskEnvelope> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(done.len());
        done
    }

    pub(super) fn in_flight(&self) -> usize {
        self.in_flight
    }
}

pub(super) fn load_job(
    api: RemoteClient,
    kind: ViewKind,
) -> impl FnOnce() -> TaskResult + Send + 'static {
    move || match kind {
        ViewKind::FlatAds => TaskResult::FlatLoaded(api.fetch::<FlatAds>()),
        ViewKind::GridAds => TaskResult::GridLoaded(api.fetch::<GridAds>()),
        ViewKind::Thumbnails => TaskResult::PostsLoaded(api.fetch::<Posts>()),
    }
}

pub(super) fn save_job(
    api: RemoteClient,
    request: SaveRequest,
) -> impl FnOnce() -> TaskResult + Send + 'static {
    move || {
        let result = match &request {
            SaveRequest::Flat { id, title } => api.update::<FlatAds>(id, title),
            SaveRequest::Grid { id, title } => api.update::<GridAds>(id, title),
            SaveRequest::Post { id, image_url } => api.update::<Posts>(id, image_url),
        };
        TaskResult::Saved { request, result }
    }
}
