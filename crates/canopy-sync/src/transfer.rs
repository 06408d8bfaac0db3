use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use canopy_join::FanIn;
use canopy_object::Object;
use canopy_store::KvStore;
use canopy_types::Hash;

use crate::diff::diff_trees;
use crate::error::{SyncError, SyncResult};

/// Transfer the object graph under `source_hash` from `source` into
/// `destination`.
///
/// `destination_root` is the destination's current root hash, or `None` if
/// the destination holds nothing comparable. Only objects the destination
/// lacks are transferred; trees are committed strictly after their
/// children, so a successful sync leaves the destination's transitive
/// closure intact. On failure the first error encountered anywhere in the
/// recursion is returned and nothing is rolled back — every object already
/// written is valid on its own under content addressing.
pub async fn sync(
    source: Arc<dyn KvStore>,
    source_hash: Hash,
    destination: Arc<dyn KvStore>,
    destination_root: Option<Hash>,
) -> SyncResult<()> {
    debug!(
        root = %source_hash.short(),
        source = %source.id(),
        destination = %destination.id(),
        "sync started",
    );
    sync_object(source, source_hash, destination, destination_root).await
}

/// Recursive per-object sync step. Boxed so the tree case can spawn
/// further instances of itself.
fn sync_object(
    source: Arc<dyn KvStore>,
    source_hash: Hash,
    destination: Arc<dyn KvStore>,
    destination_hash: Option<Hash>,
) -> Pin<Box<dyn Future<Output = SyncResult<()>> + Send>> {
    Box::pin(async move {
        // An object present in the destination implies its whole subtree
        // is present: stop descending.
        if destination.get(source_hash.as_str()).await?.is_some() {
            debug!(hash = %source_hash.short(), "already in destination, skipping subtree");
            return Ok(());
        }

        let Some(text) = source.get(source_hash.as_str()).await? else {
            return Err(SyncError::SourceMissing {
                hash: source_hash,
                store: source.id().clone(),
            });
        };

        let object = Object::parse(&text)?;
        match &object {
            Object::Leaf { .. } => {
                let hash = object.hash()?;
                destination.put(hash.as_str(), &object.content()?).await?;
                debug!(hash = %hash.short(), "leaf transferred");
                Ok(())
            }
            Object::Tree { entries } => {
                let comparison = resolve_comparison(&destination, destination_hash).await?;
                let diffs = diff_trees(entries, &comparison);
                debug!(
                    hash = %source_hash.short(),
                    entries = entries.len(),
                    differing = diffs.len(),
                    "tree diffed",
                );

                if !diffs.is_empty() {
                    // Fan out: dispatch every differing entry before
                    // awaiting any of them.
                    let (fan_in, reporter) = FanIn::new(diffs.len());
                    for diff in diffs {
                        let source = Arc::clone(&source);
                        let destination = Arc::clone(&destination);
                        let reporter = reporter.clone();
                        tokio::spawn(async move {
                            let outcome =
                                sync_object(source, diff.source, destination, diff.destination)
                                    .await;
                            reporter.report(outcome);
                        });
                    }
                    drop(reporter);
                    fan_in.join().await?;
                }

                // Children are committed; the tree itself may follow.
                let hash = object.hash()?;
                destination.put(hash.as_str(), &object.content()?).await?;
                debug!(hash = %hash.short(), "tree transferred");
                Ok(())
            }
        }
    })
}

/// Resolve the tree to diff against.
///
/// No destination root means the empty tree. A root the destination cannot
/// fetch is an invariant violation and fails the sync. A fetchable root
/// that is not tree-shaped diffs like the empty tree: every source entry is
/// new relative to it.
async fn resolve_comparison(
    destination: &Arc<dyn KvStore>,
    destination_hash: Option<Hash>,
) -> SyncResult<BTreeMap<String, Hash>> {
    let Some(hash) = destination_hash else {
        return Ok(BTreeMap::new());
    };
    let Some(text) = destination.get(hash.as_str()).await? else {
        return Err(SyncError::DestinationCorrupt {
            hash,
            store: destination.id().clone(),
        });
    };
    match Object::parse(&text)? {
        Object::Tree { entries } => Ok(entries),
        Object::Leaf { .. } => Ok(BTreeMap::new()),
    }
}
