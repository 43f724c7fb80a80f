//! Debounced auto-translation.
//!
//! [`DebounceScheduler`] owns the [`TranslationSession`] and turns edits into
//! at most one translation request per quiet period. Timer expiries and
//! request completions come back as [`SchedulerEvent`]s on the channel
//! returned by [`DebounceScheduler::new`]; the owner feeds them to
//! [`DebounceScheduler::handle_event`] from its event loop, so every mutation
//! of the session happens on that one loop.
//!
//! Requests are tagged with an increasing id. Only the most recently issued
//! request may write its result; anything older is cancelled when it is
//! superseded and discarded if it still manages to report back.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::backend::{translate, TranslateError, TranslationBackend};
use crate::core::constants::{DEFAULT_MODEL, DEFAULT_QUIET_INTERVAL};
use crate::core::prompt::TranslationRequest;
use crate::core::session::TranslationSession;

#[derive(Debug)]
pub enum SchedulerEvent {
    QuietElapsed {
        timer_id: u64,
    },
    Completed {
        request_id: u64,
        result: Result<String, TranslateError>,
    },
}

#[derive(Debug, Clone)]
pub struct SchedulerOptions {
    pub quiet_interval: Duration,
    pub model: String,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            quiet_interval: DEFAULT_QUIET_INTERVAL,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

struct PendingTimer {
    id: u64,
    handle: JoinHandle<()>,
}

struct LiveRequest {
    id: u64,
    cancel_token: CancellationToken,
}

pub struct DebounceScheduler {
    session: TranslationSession,
    backend: Arc<dyn TranslationBackend>,
    options: SchedulerOptions,
    tx: mpsc::UnboundedSender<SchedulerEvent>,
    timer: Option<PendingTimer>,
    next_timer_id: u64,
    last_request_id: u64,
    live_request: Option<LiveRequest>,
}

impl DebounceScheduler {
    pub fn new(
        backend: Arc<dyn TranslationBackend>,
        session: TranslationSession,
        options: SchedulerOptions,
    ) -> (Self, mpsc::UnboundedReceiver<SchedulerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            session,
            backend,
            options,
            tx,
            timer: None,
            next_timer_id: 0,
            last_request_id: 0,
            live_request: None,
        };
        (scheduler, rx)
    }

    pub fn session(&self) -> &TranslationSession {
        &self.session
    }

    /// True while an edit is waiting out its quiet interval.
    pub fn is_timer_live(&self) -> bool {
        self.timer.is_some()
    }

    pub fn last_request_id(&self) -> u64 {
        self.last_request_id
    }

    pub fn on_input_changed(&mut self, text: impl Into<String>) {
        self.session.source_text = text.into();
        self.reschedule();
    }

    pub fn on_source_language_changed(&mut self, code: impl Into<String>) {
        self.session.source_language = code.into();
        self.reschedule();
    }

    pub fn on_target_language_changed(&mut self, code: impl Into<String>) {
        self.session.target_language = code.into();
        self.reschedule();
    }

    /// Swap languages (and texts, when both are filled) and translate again.
    pub fn swap_languages(&mut self) {
        self.session.swap();
        self.reschedule();
    }

    pub fn clear(&mut self) {
        self.on_input_changed(String::new());
    }

    /// Apply one event from the scheduler channel. Returns true when the
    /// session changed.
    pub fn handle_event(&mut self, event: SchedulerEvent) -> bool {
        match event {
            SchedulerEvent::QuietElapsed { timer_id } => {
                if self.timer.as_ref().map(|timer| timer.id) != Some(timer_id) {
                    debug!(timer_id, "ignoring superseded timer");
                    return false;
                }
                self.timer = None;
                self.fire();
                true
            }
            SchedulerEvent::Completed { request_id, result } => {
                if self.live_request.as_ref().map(|request| request.id) != Some(request_id) {
                    debug!(request_id, "discarding stale translation result");
                    return false;
                }
                self.live_request = None;
                self.session.pending = false;
                self.session.translated_text = match result {
                    Ok(translated) => translated,
                    Err(err) => {
                        debug!(request_id, error = %err, "translation failed");
                        err.user_message()
                    }
                };
                true
            }
        }
    }

    /// Cancel the timer and any in-flight request.
    pub fn shutdown(&mut self) {
        self.cancel_timer();
        self.abandon_request();
    }

    fn reschedule(&mut self) {
        self.cancel_timer();

        if !self.session.has_input() {
            self.abandon_request();
            self.session.translated_text.clear();
            return;
        }

        self.next_timer_id += 1;
        let timer_id = self.next_timer_id;
        let quiet_interval = self.options.quiet_interval;
        // Measured from the edit, not from when the timer task first runs.
        let deadline = Instant::now() + quiet_interval;
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(SchedulerEvent::QuietElapsed { timer_id });
        });
        debug!(timer_id, ?quiet_interval, "translation scheduled");
        self.timer = Some(PendingTimer {
            id: timer_id,
            handle,
        });
    }

    fn fire(&mut self) {
        if !self.session.has_input() {
            self.session.translated_text.clear();
            return;
        }

        let request = TranslationRequest::new(
            self.session.source_language.clone(),
            self.session.target_language.clone(),
            self.session.source_text.clone(),
        );

        // The previous request is obsolete either way.
        self.abandon_request();

        if request.is_same_language() {
            debug!(language = %request.source_language, "same language, copying input");
            self.session.translated_text = request.source_text;
            return;
        }

        self.last_request_id += 1;
        let request_id = self.last_request_id;
        let cancel_token = CancellationToken::new();
        self.live_request = Some(LiveRequest {
            id: request_id,
            cancel_token: cancel_token.clone(),
        });
        self.session.pending = true;

        debug!(
            request_id,
            from = %request.source_language,
            to = %request.target_language,
            "issuing translation request"
        );

        let backend = Arc::clone(&self.backend);
        let model = self.options.model.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                result = translate(backend.as_ref(), &request, &model) => {
                    let _ = tx.send(SchedulerEvent::Completed { request_id, result });
                }
                _ = cancel_token.cancelled() => {
                    debug!(request_id, "translation request abandoned");
                }
            }
        });
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.handle.abort();
        }
    }

    fn abandon_request(&mut self) {
        if let Some(request) = self.live_request.take() {
            request.cancel_token.cancel();
        }
        self.session.pending = false;
    }
}

impl Drop for DebounceScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
