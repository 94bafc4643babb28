//! The shared constraints snapshot and its observer registry.

use crate::error::{StoreError, StoreResult};
use crate::fetcher::{ConstraintsFetcher, FetchResponse};
use jarb_types::ConstraintMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};
use tracing::{debug, info, warn};

type Observer = Arc<dyn Fn(&Arc<ConstraintMap>) + Send + Sync>;

/// Identifies one observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

struct Inner {
    constraints: RwLock<Option<Arc<ConstraintMap>>>,
    /// Held across replace-then-notify so concurrent updates fan out in the
    /// order they were stored.
    updating: Mutex<()>,
    observers: Mutex<Vec<(SubscriptionId, Observer)>>,
    next_id: AtomicU64,
    fetcher: Arc<dyn ConstraintsFetcher>,
}

impl Inner {
    fn remove_observer(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock().unwrap_or_else(PoisonError::into_inner);
        match observers.iter().position(|(registered, _)| *registered == id) {
            Some(index) => {
                observers.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Holds the current [`ConstraintMap`] and notifies observers when it is replaced.
///
/// Cloning yields another handle to the same store. The snapshot starts out
/// absent and is only ever replaced whole, never merged.
#[derive(Clone)]
pub struct ConstraintsStore {
    inner: Arc<Inner>,
}

impl ConstraintsStore {
    /// Creates an empty store that loads constraints through `fetcher`.
    pub fn new(fetcher: impl ConstraintsFetcher + 'static) -> Self {
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn ConstraintsFetcher>) -> Self {
        Self {
            inner: Arc::new(Inner {
                constraints: RwLock::new(None),
                updating: Mutex::new(()),
                observers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                fetcher,
            }),
        }
    }

    /// Returns the current snapshot, or `None` before anything was stored.
    pub fn get_constraints(&self) -> Option<Arc<ConstraintMap>> {
        self.inner
            .constraints
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the snapshot, then calls every observer with it.
    ///
    /// Observers run synchronously, in registration order, after the snapshot
    /// and registry locks are released, so they may read the store or deregister. The set of
    /// observers called is fixed when notification starts. A panicking
    /// observer aborts the remaining notifications.
    ///
    /// Concurrent calls are serialized: the last map stored is also the last
    /// map observers receive. An observer must not call `set_constraints` on
    /// the same store.
    pub fn set_constraints(&self, constraints: ConstraintMap) {
        let _updating = self
            .inner
            .updating
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let constraints = Arc::new(constraints);
        *self
            .inner
            .constraints
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&constraints));

        let observers: Vec<Observer> = self
            .inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        info!(
            "Stored constraints for {} entities, notifying {} observers",
            constraints.len(),
            observers.len()
        );

        for observer in observers {
            observer(&constraints);
        }
    }

    /// Fetches `url`, stores the returned constraints and hands back the
    /// transport result.
    ///
    /// All observers have run by the time this resolves. On failure the
    /// previous snapshot stays in place.
    pub async fn load_constraints(&self, url: &str) -> StoreResult<FetchResponse> {
        let response = match self.inner.fetcher.fetch(url).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to load constraints from {}: {}", url, e);
                return Err(e);
            }
        };

        let constraints = ConstraintMap::from_value(response.data.clone()).map_err(|e| {
            warn!("Rejected constraints payload from {}: {}", response.url, e);
            StoreError::from(e)
        })?;

        self.set_constraints(constraints);
        info!("Loaded constraints from {} ({})", response.url, response.status);
        Ok(response)
    }

    /// Registers `callback` to run on every [`set_constraints`](Self::set_constraints).
    ///
    /// Registering the same closure twice yields two independent registrations.
    pub fn on_constraints_changed<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Arc<ConstraintMap>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(callback)));
        debug!("Registered constraints observer {}", id);

        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl fmt::Debug for ConstraintsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintsStore")
            .field("loaded", &self.get_constraints().is_some())
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Handle returned by [`ConstraintsStore::on_constraints_changed`].
///
/// Dropping the handle leaves the observer registered; call
/// [`deregister`](Self::deregister) to remove it.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: SubscriptionId,
    store: Weak<Inner>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Removes exactly this registration. Repeated calls are no-ops.
    pub fn deregister(&self) {
        let Some(inner) = self.store.upgrade() else {
            return;
        };
        if inner.remove_observer(self.id) {
            debug!("Deregistered constraints observer {}", self.id);
        }
    }
}
