use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use canopy_join::FanIn;
use canopy_object::Object;
use canopy_store::KvStore;
use canopy_types::Hash;

use crate::error::{FsckError, FsckResult};

/// Verify every object reachable from `hash` in `store`.
///
/// Each object is fetched, decoded, and re-hashed from its own content;
/// the recomputed hash must equal the key it is stored under. Tree
/// children are checked concurrently; the first failure anywhere in the
/// walk is the one reported.
pub async fn fsck(store: Arc<dyn KvStore>, hash: Hash) -> FsckResult<()> {
    debug!(root = %hash.short(), store = %store.id(), "fsck started");
    check_object(store, hash).await
}

fn check_object(
    store: Arc<dyn KvStore>,
    hash: Hash,
) -> Pin<Box<dyn Future<Output = FsckResult<()>> + Send>> {
    Box::pin(async move {
        let Some(text) = store.get(hash.as_str()).await? else {
            return Err(FsckError::MissingObject {
                hash,
                store: store.id().clone(),
            });
        };

        let object = Object::parse(&text)?;
        let computed = object.hash()?;
        if computed != hash {
            return Err(FsckError::HashMismatch {
                expected: hash,
                computed,
                store: store.id().clone(),
            });
        }

        match &object {
            Object::Leaf { .. } => Ok(()),
            Object::Tree { entries } => {
                if entries.is_empty() {
                    return Ok(());
                }
                let (fan_in, reporter) = FanIn::new(entries.len());
                for child in entries.values() {
                    let store = Arc::clone(&store);
                    let child = child.clone();
                    let reporter = reporter.clone();
                    tokio::spawn(async move {
                        let outcome = check_object(store, child).await;
                        reporter.report(outcome);
                    });
                }
                drop(reporter);
                fan_in.join().await?;
                debug!(hash = %hash.short(), children = entries.len(), "tree verified");
                Ok(())
            }
        }
    })
}
