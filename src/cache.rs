// Copyright 2025 Cowboy AI, LLC.

//! Catalog cache
//!
//! Process-wide memoization of the plant catalog, the genus cohabitation
//! table and the city-wide factor summary. Instead of a module-level
//! singleton the cache is an explicit context object handed to callers.
//! Snapshots are immutable `Arc`s, so a reader can never observe a
//! partially built value and mutating a returned snapshot cannot affect
//! the cache. Concurrent rebuilds are coalesced: at most one load runs at
//! a time and overlapping refresh requests await the in-flight one.

use std::sync::{Arc, Condvar, Mutex};

use tracing::debug;

use crate::cohabitation::GeneraCohabitation;
use crate::errors::{CompositionError, CompositionResult};
use crate::plant::Plant;
use crate::territory::Territory;

/// Supplier of catalog data, implemented by the persistence layer
pub trait CatalogSource {
    /// Load the full plant catalog
    fn load_catalog(&self) -> CompositionResult<Vec<Plant>>;

    /// Load the genus cohabitation table
    fn load_cohabitation(&self) -> CompositionResult<Vec<GeneraCohabitation>>;

    /// Load the city-wide factor summary as a territory
    fn load_global_territory(&self) -> CompositionResult<Territory>;
}

/// One immutable view of the catalog data
///
/// Parts are individually `Arc`-wrapped so the per-value accessors hand
/// them out without copying.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    /// The full plant catalog
    pub catalog: Arc<Vec<Plant>>,
    /// The genus cohabitation table
    pub cohabitation: Arc<Vec<GeneraCohabitation>>,
    /// The city-wide factor summary
    pub global_territory: Arc<Territory>,
}

struct CacheState {
    snapshot: Option<Arc<CatalogSnapshot>>,
    /// Bumped on every completed rebuild, successful or not
    epoch: u64,
    rebuilding: bool,
    last_error: Option<CompositionError>,
}

/// Caching context over a [`CatalogSource`]
pub struct CatalogCache<S: CatalogSource> {
    source: S,
    state: Mutex<CacheState>,
    rebuilt: Condvar,
}

impl<S: CatalogSource> CatalogCache<S> {
    /// Create an empty cache over the given source
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(CacheState {
                snapshot: None,
                epoch: 0,
                rebuilding: false,
                last_error: None,
            }),
            rebuilt: Condvar::new(),
        }
    }

    /// Current snapshot, loading it on first use
    pub fn snapshot(&self) -> CompositionResult<Arc<CatalogSnapshot>> {
        let mut state = self.state.lock().expect("cache lock poisoned");
        loop {
            if let Some(snapshot) = &state.snapshot {
                return Ok(Arc::clone(snapshot));
            }
            if state.rebuilding {
                state = self.rebuilt.wait(state).expect("cache lock poisoned");
                continue;
            }
            state.rebuilding = true;
            drop(state);
            return self.rebuild();
        }
    }

    /// The cached plant catalog, loading on first use
    pub fn catalog(&self) -> CompositionResult<Arc<Vec<Plant>>> {
        Ok(Arc::clone(&self.snapshot()?.catalog))
    }

    /// The cached genus cohabitation table, loading on first use
    pub fn cohabitation(&self) -> CompositionResult<Arc<Vec<GeneraCohabitation>>> {
        Ok(Arc::clone(&self.snapshot()?.cohabitation))
    }

    /// The cached city-wide factor summary, loading on first use
    pub fn global_territory(&self) -> CompositionResult<Arc<Territory>> {
        Ok(Arc::clone(&self.snapshot()?.global_territory))
    }

    /// Force a rebuild and replace the cached snapshot
    ///
    /// Overlapping refresh calls are coalesced: a caller that finds a
    /// rebuild already in flight waits for it and shares its outcome
    /// instead of duplicating the load.
    pub fn refresh(&self) -> CompositionResult<Arc<CatalogSnapshot>> {
        let mut state = self.state.lock().expect("cache lock poisoned");
        let requested_at = state.epoch;
        loop {
            if state.epoch > requested_at {
                return match &state.snapshot {
                    Some(snapshot) => Ok(Arc::clone(snapshot)),
                    None => Err(state
                        .last_error
                        .clone()
                        .unwrap_or_else(|| CompositionError::source("rebuild produced nothing"))),
                };
            }
            if state.rebuilding {
                state = self.rebuilt.wait(state).expect("cache lock poisoned");
                continue;
            }
            state.rebuilding = true;
            drop(state);
            return self.rebuild();
        }
    }

    /// Run the load outside the lock, then publish the outcome
    fn rebuild(&self) -> CompositionResult<Arc<CatalogSnapshot>> {
        let result = self.load();
        let mut state = self.state.lock().expect("cache lock poisoned");
        state.rebuilding = false;
        state.epoch += 1;
        let outcome = match result {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                state.snapshot = Some(Arc::clone(&snapshot));
                state.last_error = None;
                Ok(snapshot)
            }
            Err(err) => {
                state.last_error = Some(err.clone());
                Err(err)
            }
        };
        drop(state);
        self.rebuilt.notify_all();
        outcome
    }

    fn load(&self) -> CompositionResult<CatalogSnapshot> {
        let catalog = self.source.load_catalog()?;
        let cohabitation = self.source.load_cohabitation()?;
        let global_territory = self.source.load_global_territory()?;
        debug!(
            plants = catalog.len(),
            cohabitation_pairs = cohabitation.len(),
            "catalog snapshot rebuilt"
        );
        Ok(CatalogSnapshot {
            catalog: Arc::new(catalog),
            cohabitation: Arc::new(cohabitation),
            global_territory: Arc::new(global_territory),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        loads: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                loads: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                loads: AtomicUsize::new(0),
                fail: true,
            }
        }
    }

    impl CatalogSource for CountingSource {
        fn load_catalog(&self) -> CompositionResult<Vec<Plant>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CompositionError::source("unavailable"));
            }
            Ok(vec![Plant::new("oak", "Quercus robur").with_genus("Quercus")])
        }

        fn load_cohabitation(&self) -> CompositionResult<Vec<GeneraCohabitation>> {
            Ok(Vec::new())
        }

        fn load_global_territory(&self) -> CompositionResult<Territory> {
            Ok(Territory::default())
        }
    }

    #[test]
    fn test_lazy_load_happens_once() {
        let cache = CatalogCache::new(CountingSource::new());
        let first = cache.snapshot().unwrap();
        let second = cache.snapshot().unwrap();
        assert_eq!(cache.source.loads.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_refresh_replaces_snapshot() {
        let cache = CatalogCache::new(CountingSource::new());
        let first = cache.snapshot().unwrap();
        let refreshed = cache.refresh().unwrap();
        assert_eq!(cache.source.loads.load(Ordering::SeqCst), 2);
        assert!(!Arc::ptr_eq(&first, &refreshed));
        // stale snapshot stays readable
        assert_eq!(first.catalog.len(), 1);
    }

    #[test]
    fn test_failed_load_surfaces_error() {
        let cache = CatalogCache::new(CountingSource::failing());
        assert!(cache.snapshot().is_err());
        // a later call retries instead of caching the failure
        assert!(cache.snapshot().is_err());
        assert_eq!(cache.source.loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_readers_share_one_load() {
        use std::thread;

        let cache = Arc::new(CatalogCache::new(CountingSource::new()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.snapshot().map(|s| s.catalog.len()))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 1);
        }
        assert_eq!(cache.source.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_mutating_returned_value_does_not_affect_cache() {
        let cache = CatalogCache::new(CountingSource::new());
        let mut catalog = (*cache.catalog().unwrap()).clone();
        catalog.clear();
        assert_eq!(cache.catalog().unwrap().len(), 1);
        assert_eq!(cache.cohabitation().unwrap().len(), 0);
        assert!(cache.global_territory().unwrap().usda_zone.is_none());
    }
}
