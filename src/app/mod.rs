//! Application state and the load workflow.
//!
//! `App` owns the three pieces of UI state (current page, loading flag,
//! error message) plus the page picker and request generation. State
//! transitions are plain methods — `begin_load` and `handle_message` — so
//! the whole workflow is testable without a terminal or a network.

mod messages;
mod pager;
mod view_model;

pub use messages::AppMessage;
pub use pager::PagePicker;
pub use view_model::{build_page_view, PageView, VerseLine, BASMALA, DEFAULT_SURAH_LABEL};

use tokio::sync::mpsc;

use crate::api::QuranClient;
use crate::traits::RandomSource;

/// A load that has been started and needs a fetch task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingLoad {
    pub generation: u64,
    pub page: u16,
}

/// Application state.
pub struct App {
    /// The page currently on screen, if any load has succeeded yet.
    pub current_page: Option<PageView>,
    /// True while a fetch is in flight.
    pub loading: bool,
    /// User-facing error message from the last failed load.
    pub error: Option<String>,
    /// Set when the user asks to exit.
    pub should_quit: bool,
    /// Dirty flag for the renderer.
    pub needs_redraw: bool,
    /// Animation tick counter (drives the loading spinner).
    pub tick_count: u64,

    /// Generation of the most recently started load. Results tagged with an
    /// older generation are discarded.
    generation: u64,
    pager: PagePicker,
    random: Box<dyn RandomSource>,
    client: QuranClient,

    /// Sender handed to spawned fetch tasks.
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver polled by the event loop. Taken by `run_app`.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    pub fn new(client: QuranClient, random: Box<dyn RandomSource>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            current_page: None,
            loading: false,
            error: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            generation: 0,
            pager: PagePicker::new(),
            random,
            client,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Start the load workflow: set the loading flag, clear any prior
    /// error, pick a page and advance the generation.
    ///
    /// Returns `None` while a load is already in flight (the action control
    /// is disabled during loading).
    pub fn begin_load(&mut self) -> Option<PendingLoad> {
        if self.loading {
            return None;
        }

        self.loading = true;
        self.error = None;
        self.generation += 1;
        self.mark_dirty();

        let page = self.pager.next_page(self.random.as_mut());
        tracing::info!(page, generation = self.generation, "starting page load");

        Some(PendingLoad {
            generation: self.generation,
            page,
        })
    }

    /// Start the workflow and spawn the fetch task for it.
    ///
    /// Exactly one network call per invocation; the task reports back over
    /// the message channel.
    pub fn load_random_page(&mut self) {
        let Some(pending) = self.begin_load() else {
            return;
        };

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.get_page(pending.page).await {
                Ok(data) => AppMessage::PageLoaded {
                    generation: pending.generation,
                    page_number: pending.page,
                    data,
                },
                Err(err) => AppMessage::PageLoadFailed {
                    generation: pending.generation,
                    message: err.user_message(),
                },
            };
            // The receiver only goes away on shutdown.
            let _ = tx.send(message);
        });
    }

    /// Apply the result of a fetch task.
    ///
    /// Success replaces the current page wholesale and records the page as
    /// last shown. Failure stores the error message and leaves any
    /// previously displayed page untouched. Either way the loading flag is
    /// cleared. Results from a stale generation are dropped.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PageLoaded {
                generation,
                page_number,
                data,
            } => {
                if generation != self.generation {
                    tracing::debug!(generation, "discarding stale page result");
                    return;
                }
                self.pager.record_shown(page_number);
                self.current_page = Some(build_page_view(page_number, &data));
                self.loading = false;
                self.mark_dirty();
            }
            AppMessage::PageLoadFailed {
                generation,
                message,
            } => {
                if generation != self.generation {
                    tracing::debug!(generation, "discarding stale page error");
                    return;
                }
                tracing::warn!(%message, "page load failed");
                self.error = Some(message);
                self.loading = false;
                self.mark_dirty();
            }
        }
    }

    /// The page recorded by the last successful load.
    pub fn last_shown(&self) -> Option<u16> {
        self.pager.last_shown()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
