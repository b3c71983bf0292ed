//! Process-wide cache of compiled date formatters.
//!
//! Building a formatter compiles its pattern and resolves its time zone, so
//! formatters are built once per distinct [`FormatSpec`] and shared through
//! `Arc` afterwards. Entries are never evicted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::Lazy;

use crate::dates::formatter::DateFormatter;

static SHARED: Lazy<FormatterCache> = Lazy::new(FormatterCache::new);

/// Identity of a formatter: its pattern, locale and time zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    pub pattern: String,
    pub locale: Option<String>,
    pub time_zone: Option<String>,
}

impl FormatSpec {
    pub fn new(pattern: &str, locale: Option<&str>, time_zone: Option<&str>) -> Self {
        FormatSpec {
            pattern: pattern.to_string(),
            locale: locale.map(String::from),
            time_zone: time_zone.map(String::from),
        }
    }
}

type Builder<T> = Box<dyn Fn(&FormatSpec) -> T + Send + Sync>;

/// Lazily populated map from [`FormatSpec`] to a shared formatter.
pub struct FormatterCache<T = DateFormatter> {
    entries: Mutex<HashMap<FormatSpec, Arc<T>>>,
    builder: Builder<T>,
}

impl FormatterCache<DateFormatter> {
    /// Creates an empty cache of date formatters.
    pub fn new() -> Self {
        Self::with_builder(DateFormatter::new)
    }

    /// The cache shared by the whole process.
    pub fn shared() -> &'static FormatterCache {
        &SHARED
    }
}

impl Default for FormatterCache<DateFormatter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FormatterCache<T> {
    /// Creates an empty cache whose entries are made by `builder`.
    pub fn with_builder<F>(builder: F) -> Self
    where
        F: Fn(&FormatSpec) -> T + Send + Sync + 'static,
    {
        FormatterCache {
            entries: Mutex::new(HashMap::new()),
            builder: Box::new(builder),
        }
    }

    /// Returns the formatter for the spec, building it on first use.
    ///
    /// Lookup and insertion happen under one lock, so concurrent callers
    /// asking for the same spec get the same instance and the builder runs
    /// once per spec.
    pub fn get(&self, spec: &FormatSpec) -> Arc<T> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = entries.get(spec) {
            return Arc::clone(entry);
        }

        let entry = Arc::new((self.builder)(spec));
        entries.insert(spec.clone(), Arc::clone(&entry));
        entry
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, spec: &FormatSpec) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    fn counting_cache() -> (Arc<AtomicUsize>, Arc<FormatterCache<String>>) {
        let builds = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&builds);
        let cache = FormatterCache::with_builder(move |spec: &FormatSpec| {
            counter.fetch_add(1, Ordering::SeqCst);
            spec.pattern.clone()
        });
        (builds, Arc::new(cache))
    }

    #[test]
    fn test_same_spec_same_instance() {
        let cache = FormatterCache::new();
        let spec = FormatSpec::new("yyyy-MM-dd", Some("en_US"), Some("UTC"));

        let first = cache.get(&spec);
        let second = cache.get(&spec.clone());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&spec));
    }

    #[test]
    fn test_distinct_specs_distinct_instances() {
        let cache = FormatterCache::new();
        let a = cache.get(&FormatSpec::new("yyyy-MM-dd", None, None));
        let b = cache.get(&FormatSpec::new("yyyy-MM-dd", Some("fr"), None));
        let c = cache.get(&FormatSpec::new("yyyy-MM-dd", None, Some("UTC")));
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_invalid_specs_are_cached_too() {
        let cache = FormatterCache::new();
        assert!(cache.is_empty());
        let spec = FormatSpec::new("yyyy-QQ", None, None);
        assert!(!cache.get(&spec).is_valid());
        assert!(cache.contains(&spec));
    }

    #[test]
    fn test_builder_runs_once_per_spec() {
        let (builds, cache) = counting_cache();
        let spec = FormatSpec::new("HH:mm", None, None);
        for _ in 0..10 {
            assert_eq!(*cache.get(&spec), "HH:mm");
        }
        cache.get(&FormatSpec::new("mm:ss", None, None));
        assert_eq!(builds.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_lookups_build_once() {
        const THREADS: usize = 16;
        let (builds, cache) = counting_cache();
        let barrier = Arc::new(Barrier::new(THREADS));
        let spec = FormatSpec::new("yyyy-MM-dd", Some("en_US"), None);

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                let spec = spec.clone();
                thread::spawn(move || {
                    barrier.wait();
                    cache.get(&spec)
                })
            })
            .collect();

        let results: Vec<Arc<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| Arc::ptr_eq(r, &results[0])));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_shared_cache_is_a_singleton() {
        assert!(std::ptr::eq(FormatterCache::shared(), FormatterCache::shared()));
        let spec = FormatSpec::new("yyyy", Some("en"), Some("UTC"));
        let first = FormatterCache::shared().get(&spec);
        let second = FormatterCache::shared().get(&spec);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
