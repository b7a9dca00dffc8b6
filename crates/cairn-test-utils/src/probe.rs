//! An element type instrumented for lifetime accounting.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared construction/drop tallies for [`Probe`] instances.
///
/// `live()` is the number of tracked instances currently in existence.
/// Container code clones elements across buffer transitions, so the
/// raw `created`/`dropped` totals grow with internal traffic; `live()`
/// is the signal that pins down reclamation behaviour.
#[derive(Debug, Default)]
pub struct ProbeCounters {
    created: AtomicUsize,
    dropped: AtomicUsize,
}

impl ProbeCounters {
    /// Fresh counters, wrapped for sharing with probes.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Total tracked instances ever created (including clones).
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Total tracked instances dropped.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }

    /// Tracked instances currently alive.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// A value that reports its lifetime events to a [`ProbeCounters`].
///
/// The `Default` instance is untracked — containers that default-fill
/// vacant slots would otherwise drown the tallies in bookkeeping
/// noise. Equality and rendering use only `value`.
pub struct Probe {
    pub value: i64,
    counters: Option<Arc<ProbeCounters>>,
}

impl Probe {
    /// A tracked probe carrying `value`.
    pub fn new(value: i64, counters: &Arc<ProbeCounters>) -> Self {
        counters.created.fetch_add(1, Ordering::SeqCst);
        Self {
            value,
            counters: Some(Arc::clone(counters)),
        }
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        if let Some(counters) = &self.counters {
            counters.created.fetch_add(1, Ordering::SeqCst);
        }
        Self {
            value: self.value,
            counters: self.counters.clone(),
        }
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        if let Some(counters) = &self.counters {
            counters.dropped.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self {
            value: 0,
            counters: None,
        }
    }
}

impl PartialEq for Probe {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Probe {}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Probe({})", self.value)
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracked_probe_counts_its_own_lifetime() {
        let counters = ProbeCounters::new();
        {
            let _p = Probe::new(1, &counters);
            assert_eq!(counters.live(), 1);
        }
        assert_eq!(counters.live(), 0);
        assert_eq!(counters.created(), 1);
        assert_eq!(counters.dropped(), 1);
    }

    #[test]
    fn clones_are_tracked() {
        let counters = ProbeCounters::new();
        let p = Probe::new(5, &counters);
        let q = p.clone();
        assert_eq!(q.value, 5);
        assert_eq!(counters.live(), 2);
        drop(p);
        drop(q);
        assert_eq!(counters.live(), 0);
    }

    #[test]
    fn default_probe_is_untracked() {
        let counters = ProbeCounters::new();
        {
            let _d = Probe::default();
        }
        assert_eq!(counters.created(), 0);
        assert_eq!(counters.dropped(), 0);
    }

    #[test]
    fn equality_uses_value_only() {
        let counters = ProbeCounters::new();
        let tracked = Probe::new(0, &counters);
        assert_eq!(tracked, Probe::default());
    }
}
