//! Producer tasks and the channel merge that feeds the collector.
//!
//! Every (source, identifier) pair runs as its own task with its own bounded
//! channel. [`fan_in`] merges any number of those channels into one; the
//! merged channel closes only once every input has closed.

use std::sync::Arc;

use fakeorfact_common::Claim;
use fakeorfact_sources::ClaimSource;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error};

/// Buffer size of each producer channel and of the merged channel.
pub const PRODUCER_CAPACITY: usize = 64;

/// Run `source.get_claims(identifier)` on its own task and stream the claims
/// out. The channel closes when the source is done, or when it panics; a
/// panic is logged by a watcher task.
pub fn spawn_producer(source: Arc<dyn ClaimSource>, identifier: String) -> mpsc::Receiver<Claim> {
    let (tx, rx) = mpsc::channel(PRODUCER_CAPACITY);
    let source_name = source.name().to_string();
    let watched_identifier = identifier.clone();

    let producer = tokio::spawn(async move {
        let claims = source.get_claims(&identifier).await;
        for claim in claims {
            if tx.send(claim).await.is_err() {
                debug!(source = source.name(), identifier = %identifier, "Receiver dropped, stopping producer");
                break;
            }
        }
    });

    tokio::spawn(async move {
        if let Err(e) = producer.await {
            error!(
                source = %source_name,
                identifier = %watched_identifier,
                error = %e,
                "Claim producer failed"
            );
        }
    });

    rx
}

/// Merge `inputs` into a single channel in arrival order.
///
/// The supervisor task holds the only remaining sender and drops it after
/// every forwarder has joined. An input that never closes keeps the merged
/// channel open forever.
pub fn fan_in(inputs: Vec<mpsc::Receiver<Claim>>) -> mpsc::Receiver<Claim> {
    let (tx, rx) = mpsc::channel(PRODUCER_CAPACITY);

    let mut forwarders = JoinSet::new();
    for mut input in inputs {
        let tx = tx.clone();
        forwarders.spawn(async move {
            while let Some(claim) = input.recv().await {
                if tx.send(claim).await.is_err() {
                    break;
                }
            }
        });
    }

    tokio::spawn(async move {
        while let Some(joined) = forwarders.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "Fan-in forwarder failed");
            }
        }
        drop(tx);
    });

    rx
}
