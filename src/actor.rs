//! Single-task front-end for sharing one sink between async producers.
//!
//! The sink lives on its own tokio task and handles requests strictly in
//! arrival order, so its pending-line state never sees two messages at once.
//! Handles are cheap to clone; the task ends once every handle is dropped and
//! returns the sink through its `JoinHandle`.

use futures::stream::{Stream, StreamExt};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::error::{AggregateError, DispatchError, ErrorPolicy, Stage};
use crate::sink::MessageSink;

struct Request {
    encoded: String,
    reply: oneshot::Sender<Result<(), DispatchError>>,
}

#[derive(Debug, Clone)]
pub struct SinkActor {
    tx: mpsc::Sender<Request>,
}

impl SinkActor {
    /// Move `sink` onto a new task with room for `capacity` queued messages.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<S>(sink: S, capacity: usize) -> (Self, JoinHandle<S>)
    where
        S: MessageSink + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<Request>(capacity.max(1));
        let task = tokio::spawn(async move {
            let mut sink = sink;
            while let Some(req) = rx.recv().await {
                let result = sink.dispatch(&req.encoded);
                // The producer may have stopped waiting.
                let _ = req.reply.send(result);
            }
            sink
        });
        (Self { tx }, task)
    }

    pub fn accepts(&self, _kind: &str) -> bool {
        true
    }

    /// Queue one encoded message and wait for the sink to handle it.
    pub async fn dispatch(&self, encoded: impl Into<String>) -> Result<(), DispatchError> {
        let encoded = encoded.into();
        let (reply, response) = oneshot::channel();
        let request = Request {
            encoded: encoded.clone(),
            reply,
        };

        if self.tx.send(request).await.is_err() {
            return Err(DispatchError::new(
                Stage::Closed,
                encoded,
                "sink task has stopped",
            ));
        }

        match response.await {
            Ok(result) => result,
            Err(_) => Err(DispatchError::new(
                Stage::Closed,
                encoded,
                "sink task dropped the request",
            )),
        }
    }

    /// Dispatch every item of `messages` in order, honoring `error_policy`.
    ///
    /// Returns the number of messages handled successfully.
    pub async fn forward<St>(
        &self,
        messages: St,
        error_policy: ErrorPolicy,
    ) -> Result<usize, AggregateError>
    where
        St: Stream<Item = String>,
    {
        let mut messages = std::pin::pin!(messages);
        let mut dispatched = 0;
        let mut errors = Vec::new();

        while let Some(encoded) = messages.next().await {
            match self.dispatch(encoded).await {
                Ok(()) => dispatched += 1,
                Err(e) => {
                    errors.push(e);
                    if matches!(error_policy, ErrorPolicy::FastFail) {
                        return Err(AggregateError { errors });
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(dispatched)
        } else {
            Err(AggregateError { errors })
        }
    }
}
