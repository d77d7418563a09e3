// ============================================================================
// Shared Rounder
// Mutex-guarded handle for using one rounder from several threads
// ============================================================================

use crate::interfaces::Rounder;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, thread-safe handle around a single rounder
///
/// Calls are serialised, so an alternating rounder keeps one global
/// up/down sequence no matter which thread calls it. Clones share state.
#[derive(Clone)]
pub struct SharedRounder {
    inner: Arc<Mutex<Box<dyn Rounder>>>,
}

impl SharedRounder {
    pub fn new(rounder: impl Rounder + 'static) -> Self {
        Self::from_boxed(Box::new(rounder))
    }

    pub fn from_boxed(rounder: Box<dyn Rounder>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rounder)),
        }
    }

    pub fn round(&self, value: f64) -> f64 {
        self.inner.lock().round(value)
    }

    pub fn name(&self) -> String {
        self.inner.lock().name().to_string()
    }
}

impl std::fmt::Debug for SharedRounder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRounder")
            .field("name", &self.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CompositeRounder;
    use std::thread;

    #[test]
    fn test_alternation_survives_threads() {
        let shared = SharedRounder::new(CompositeRounder::half_alternate());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let rounder = shared.clone();
                thread::spawn(move || (0..250).map(|_| rounder.round(0.5)).sum::<f64>())
            })
            .collect();

        let total: f64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 500.0);
    }

    #[test]
    fn test_name() {
        let shared = SharedRounder::new(CompositeRounder::symmetric_alternate());
        assert_eq!(shared.name(), "symmetric-alternate");
        assert!(format!("{:?}", shared).contains("symmetric-alternate"));
    }
}
