//! Tests for the single-task sink actor.

use std::sync::Arc;

use futures::stream;

use crate::actor::SinkActor;
use crate::error::{ErrorPolicy, Stage};
use crate::io::InMemoryTerminal;
use crate::sink::MessageSink;
use crate::{SinkBuilder, SinkConfig};

fn tty_sink() -> (Box<dyn MessageSink>, InMemoryTerminal) {
    let term = InMemoryTerminal::interactive("tty");
    let sink = SinkBuilder::new(SinkConfig::default())
        .with_target(Arc::new(term.clone()))
        .build()
        .unwrap();
    (sink, term)
}

fn fix(count: u64) -> String {
    format!(r#"{{"type":"apply-fix","ruleName":"r","filePath":"f","count":{count}}}"#)
}

#[tokio::test]
async fn dispatches_through_the_task() {
    let (sink, term) = tty_sink();
    let (actor, task) = SinkActor::spawn(sink, 8);

    assert!(actor.accepts("anything"));
    actor.dispatch(fix(1)).await.unwrap();
    actor.dispatch(fix(2)).await.unwrap();

    let err = actor.dispatch("{nope").await.unwrap_err();
    assert_eq!(err.stage, Stage::Decode);

    drop(actor);
    let sink = task.await.unwrap();
    assert!(sink.has_pending_progress_line());
    assert_eq!(term.screen(), vec!["Fixed 2 issues so far".to_string()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_producers_are_serialized() {
    let (sink, term) = tty_sink();
    let (actor, task) = SinkActor::spawn(sink, 4);

    let mut producers = Vec::new();
    for p in 0..4u64 {
        let actor = actor.clone();
        producers.push(tokio::spawn(async move {
            for i in 1..=25u64 {
                actor.dispatch(fix((p + 1) * 100 + i)).await.unwrap();
                actor
                    .dispatch(format!(r#"{{"type":"timer-end","metric":"p{p}"}}"#))
                    .await
                    .unwrap();
            }
        }));
    }
    for producer in producers {
        producer.await.unwrap();
    }
    drop(actor);
    task.await.unwrap();

    // Counters all have three digits, so a complete overwrite always leaves
    // a well-formed line; a break only ever follows a pending counter.
    let screen = term.screen();
    let breaks = term.line_breaks();
    assert!((1..=100).contains(&breaks), "got {breaks} breaks");
    assert_eq!(screen.len(), breaks + 1);
    for line in &screen[..breaks] {
        assert_eq!(line.len(), "Fixed 101 issues so far".len(), "{line:?}");
        assert!(line.starts_with("Fixed "), "corrupted line {line:?}");
        assert!(line.ends_with(" issues so far"), "corrupted line {line:?}");
    }
    let last = &screen[breaks];
    assert!(last.is_empty() || last.ends_with(" issues so far"), "{last:?}");
}

#[tokio::test]
async fn forward_honors_policy() {
    let (sink, term) = tty_sink();
    let (actor, _task) = SinkActor::spawn(sink, 2);

    let messages = vec![fix(1), "[]".to_string(), fix(2), "{".to_string()];
    let err = actor
        .forward(stream::iter(messages.clone()), ErrorPolicy::Accumulate)
        .await
        .unwrap_err();
    assert_eq!(err.len(), 2);
    assert_eq!(term.screen(), vec!["Fixed 2 issues so far".to_string()]);

    let err = actor
        .forward(stream::iter(messages), ErrorPolicy::FastFail)
        .await
        .unwrap_err();
    assert_eq!(err.len(), 1);

    let handled = actor
        .forward(stream::iter(vec![fix(3)]), ErrorPolicy::FastFail)
        .await
        .unwrap();
    assert_eq!(handled, 1);
}

#[tokio::test]
async fn stopped_task_reports_closed() {
    let (sink, _term) = tty_sink();
    let (actor, task) = SinkActor::spawn(sink, 1);
    task.abort();
    let _ = task.await;

    let err = actor.dispatch(fix(1)).await.unwrap_err();
    assert_eq!(err.stage, Stage::Closed);
}
