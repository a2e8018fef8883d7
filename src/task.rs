//! Bridge between the egui UI thread and backend calls.
//!
//! Calls run as futures on a tokio runtime. Each one hands its result back
//! through a oneshot channel that the owning view polls once per frame, so
//! view state is only ever touched from the UI thread.

use crate::api::{ApiError, QuestionsApi};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Identifies one activation of a view. Results carry the activation they
/// were started under and are discarded if the view has moved on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Activation(u64);

impl Activation {
    pub fn next(self) -> Self {
        Activation(self.0.wrapping_add(1))
    }
}

/// Handle that views use to start backend calls.
#[derive(Clone)]
pub struct Backend {
    api: Arc<dyn QuestionsApi>,
    runtime: Handle,
    repaint: Option<egui::Context>,
}

impl Backend {
    pub fn new(api: Arc<dyn QuestionsApi>, runtime: Handle) -> Self {
        Self {
            api,
            runtime,
            repaint: None,
        }
    }

    /// Wakes the UI whenever a call finishes, so results show up without
    /// waiting for user input.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    /// Runs `call` on the runtime and returns the slot its result lands in.
    pub fn spawn<T, F, Fut>(&self, activation: Activation, call: F) -> Pending<T>
    where
        T: Send + 'static,
        F: FnOnce(Arc<dyn QuestionsApi>) -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let future = call(Arc::clone(&self.api));
        let repaint = self.repaint.clone();

        self.runtime.spawn(async move {
            let result = future.await;
            // The receiver is gone when the view was replaced; nothing to do.
            let _ = tx.send(result);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });

        Pending { activation, rx }
    }
}

/// Result slot of a call started with [`Backend::spawn`].
pub struct Pending<T> {
    activation: Activation,
    rx: oneshot::Receiver<Result<T, ApiError>>,
}

impl<T> Pending<T> {
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Non-blocking check. `None` while the call is still running.
    pub fn poll(&mut self) -> Option<(Activation, Result<T, ApiError>)> {
        match self.rx.try_recv() {
            Ok(result) => Some((self.activation, result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                log::error!("Background call ended without a result");
                Some((
                    self.activation,
                    Err(ApiError::Client {
                        message: "background task stopped".to_string(),
                    }),
                ))
            }
        }
    }
}

/// Polls `slot` and clears it once the result is in.
pub(crate) fn take_ready<T>(
    slot: &mut Option<Pending<T>>,
) -> Option<(Activation, Result<T, ApiError>)> {
    let ready = slot.as_mut()?.poll()?;
    *slot = None;
    Some(ready)
}
