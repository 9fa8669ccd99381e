use std::any::Any;
use std::collections::HashMap;

use anyhow::Result;

/// Cache key: a resource kind plus the parameters that scope it (instance
/// id, range, ...). Responses for different parameters never collide, which
/// is what keeps an out-of-order completion from landing on the wrong
/// entity.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct QueryKey {
    pub resource: &'static str,
    pub params: Vec<String>,
}

impl QueryKey {
    pub fn new<I, S>(resource: &'static str, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resource,
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    pub fn bare(resource: &'static str) -> Self {
        Self {
            resource,
            params: Vec::new(),
        }
    }
}

/// Fetch-or-serve-cached store for backend responses. Entries never expire on
/// their own; mutations must call `invalidate`/`invalidate_resource`
/// explicitly.
#[derive(Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, Box<dyn Any>>,
}

impl QueryCache {
    pub fn get_or_fetch<T, F>(&mut self, key: QueryKey, fetch: F) -> Result<T>
    where
        T: Clone + 'static,
        F: FnOnce() -> Result<T>,
    {
        if let Some(hit) = self.entries.get(&key).and_then(|e| e.downcast_ref::<T>()) {
            return Ok(hit.clone());
        }

        let value = fetch()?;
        self.entries.insert(key, Box::new(value.clone()));
        Ok(value)
    }

    pub fn get<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        self.entries
            .get(key)
            .and_then(|e| e.downcast_ref::<T>())
            .cloned()
    }

    pub fn invalidate(&mut self, key: &QueryKey) {
        self.entries.remove(key);
    }

    pub fn invalidate_resource(&mut self, resource: &'static str) {
        self.entries.retain(|k, _| k.resource != resource);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_value_is_served_without_refetch() {
        let mut cache = QueryCache::default();
        let key = QueryKey::new("workflows", ["i1"]);

        let mut calls = 0;
        let first: Vec<String> = cache
            .get_or_fetch(key.clone(), || {
                calls += 1;
                Ok(vec!["a".to_string()])
            })
            .unwrap();
        let second: Vec<String> = cache
            .get_or_fetch(key.clone(), || {
                calls += 1;
                Ok(vec!["b".to_string()])
            })
            .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(first, second);
    }

    #[test]
    fn invalidate_forces_a_refetch() {
        let mut cache = QueryCache::default();
        let key = QueryKey::new("workflows", ["i1"]);

        let _: u32 = cache.get_or_fetch(key.clone(), || Ok(1)).unwrap();
        cache.invalidate(&key);
        let fresh: u32 = cache.get_or_fetch(key.clone(), || Ok(2)).unwrap();
        assert_eq!(fresh, 2);
    }

    #[test]
    fn keys_with_different_params_do_not_collide() {
        let mut cache = QueryCache::default();
        let a: u32 = cache
            .get_or_fetch(QueryKey::new("patterns", ["i1", "1d"]), || Ok(1))
            .unwrap();
        let b: u32 = cache
            .get_or_fetch(QueryKey::new("patterns", ["i1", "14d"]), || Ok(2))
            .unwrap();
        assert_eq!((a, b), (1, 2));
    }

    #[test]
    fn invalidate_resource_drops_every_parameterization() {
        let mut cache = QueryCache::default();
        let _: u32 = cache
            .get_or_fetch(QueryKey::new("patterns", ["i1", "1d"]), || Ok(1))
            .unwrap();
        let _: u32 = cache
            .get_or_fetch(QueryKey::new("patterns", ["i1", "14d"]), || Ok(2))
            .unwrap();
        let _: u32 = cache
            .get_or_fetch(QueryKey::new("workflows", ["i1"]), || Ok(3))
            .unwrap();

        cache.invalidate_resource("patterns");

        assert!(cache.get::<u32>(&QueryKey::new("patterns", ["i1", "1d"])).is_none());
        assert!(cache.get::<u32>(&QueryKey::new("patterns", ["i1", "14d"])).is_none());
        assert_eq!(cache.get::<u32>(&QueryKey::new("workflows", ["i1"])), Some(3));
    }

    #[test]
    fn fetch_error_caches_nothing() {
        let mut cache = QueryCache::default();
        let key = QueryKey::bare("license");

        let err: Result<u32> = cache.get_or_fetch(key.clone(), || anyhow::bail!("offline"));
        assert!(err.is_err());

        let ok: u32 = cache.get_or_fetch(key, || Ok(7)).unwrap();
        assert_eq!(ok, 7);
    }
}
