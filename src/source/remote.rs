//! Fetch dispatch backed by the HTTP client.

use super::FetchDispatch;
use crate::api::BlogClient;
use crate::state::{FetchCommand, FetchEvent, FetchKind};
use std::sync::mpsc::{self, Receiver, Sender};
use tokio::runtime::{Handle, Runtime};
use tracing::debug;

/// Runs commands concurrently on a tokio runtime.
///
/// Requests are never cancelled: when several are in flight they complete
/// in whatever order the network delivers, and each completion is queued
/// for the UI loop tagged with its command's sequence number.
pub struct RemoteSource {
    client: BlogClient,
    // Kept alive for the lifetime of the source; `handle` spawns onto it.
    _runtime: Option<Runtime>,
    handle: Handle,
    tx: Sender<FetchEvent>,
    rx: Receiver<FetchEvent>,
}

impl RemoteSource {
    /// Create a source with its own multi-threaded runtime.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the runtime cannot be built.
    pub fn new(client: BlogClient) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("blogview-fetch")
            .enable_all()
            .build()?;
        let handle = runtime.handle().clone();
        Ok(Self::build(client, Some(runtime), handle))
    }

    /// Create a source that spawns onto an existing runtime.
    pub fn with_handle(client: BlogClient, handle: Handle) -> Self {
        Self::build(client, None, handle)
    }

    fn build(client: BlogClient, runtime: Option<Runtime>, handle: Handle) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client,
            _runtime: runtime,
            handle,
            tx,
            rx,
        }
    }
}

/// Perform one command and turn the result into an event.
pub async fn execute(client: &BlogClient, command: FetchCommand) -> FetchEvent {
    let seq = command.seq();
    match command {
        FetchCommand::ListPosts {
            page, page_size, ..
        } => match client.list_posts(page, page_size).await {
            Ok(page) => FetchEvent::ListLoaded {
                seq,
                page_size,
                page,
            },
            Err(error) => FetchEvent::Failed {
                seq,
                kind: FetchKind::List,
                error,
            },
        },
        FetchCommand::GetPost { id, .. } => match client.get_post(id).await {
            Ok(post) => FetchEvent::PostLoaded { seq, post },
            Err(error) => FetchEvent::Failed {
                seq,
                kind: FetchKind::Detail,
                error,
            },
        },
    }
}

impl FetchDispatch for RemoteSource {
    fn dispatch(&mut self, command: FetchCommand) {
        debug!(?command, "Dispatching fetch");
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let event = execute(&client, command).await;
            if tx.send(event).is_err() {
                debug!("Fetch receiver dropped, discarding completion");
            }
        });
    }

    fn poll(&mut self) -> Vec<FetchEvent> {
        self.rx.try_iter().collect()
    }
}
