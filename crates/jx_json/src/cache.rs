use alloc::sync::Arc;
use core::any::TypeId;
use std::sync::{PoisonError, RwLock};

use jx_utils::TypeIdMap;

// -----------------------------------------------------------------------------
// TypeCache

/// A concurrent, grow-only map from type identity to a computed value.
///
/// Lookups take the read lock only. A miss computes the value outside any
/// lock and then stores it unless another caller got there first; every
/// caller ends up with the stored `Arc`. Entries are never replaced, so a
/// poisoned lock still guards consistent data.
pub(crate) struct TypeCache<V> {
    map: RwLock<TypeIdMap<Arc<V>>>,
}

impl<V> TypeCache<V> {
    pub(crate) const fn new() -> Self {
        Self {
            map: RwLock::new(TypeIdMap::new()),
        }
    }

    pub(crate) fn get(&self, type_id: TypeId) -> Option<Arc<V>> {
        let map = self.map.read().unwrap_or_else(PoisonError::into_inner);
        map.get(&type_id).cloned()
    }

    pub(crate) fn try_get_or_compute<E>(
        &self,
        type_id: TypeId,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<Arc<V>, E> {
        if let Some(value) = self.get(type_id) {
            return Ok(value);
        }

        let computed = Arc::new(compute()?);

        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(map.get_or_insert(type_id, || computed)))
    }

    pub(crate) fn len(&self) -> usize {
        self.map.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn first_store_wins() {
        let cache = TypeCache::<String>::new();
        let id = TypeId::of::<u8>();

        let first = cache
            .try_get_or_compute(id, || Ok::<_, ()>("first".to_owned()))
            .unwrap();
        let second = cache
            .try_get_or_compute(id, || Ok::<_, ()>("second".to_owned()))
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*second, "first");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failures_are_not_stored() {
        let cache = TypeCache::<u32>::new();
        let id = TypeId::of::<u8>();

        assert_eq!(cache.try_get_or_compute(id, || Err("nope")), Err("nope"));
        assert!(cache.get(id).is_none());
        assert_eq!(*cache.try_get_or_compute(id, || Ok::<_, ()>(7)).unwrap(), 7);
    }

    #[test]
    fn concurrent_callers_agree() {
        let cache = TypeCache::<usize>::new();
        let calls = AtomicUsize::new(0);
        let id = TypeId::of::<String>();

        let values: Vec<Arc<usize>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        cache
                            .try_get_or_compute(id, || {
                                Ok::<_, ()>(calls.fetch_add(1, Ordering::SeqCst))
                            })
                            .unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(calls.load(Ordering::SeqCst) >= 1);
        assert!(values.iter().all(|v| Arc::ptr_eq(v, &values[0])));
    }
}
