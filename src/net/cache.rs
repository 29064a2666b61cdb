// SPDX-License-Identifier: MPL-2.0
//! URL-keyed LRU cache of decoded images.
//!
//! # Design
//!
//! - **LRU eviction**: least recently used images are evicted first
//! - **Memory-bounded**: total size limited by a configurable byte limit
//! - **URL-keyed**: entries indexed by their exact display URL, so the same
//!   asset at two widths is two entries
//!
//! Prefetch completions land here; visible loads check here before going to
//! the network at all.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::net::fetch::FetchedImage;

/// Default cache size in bytes (32 MB).
/// Roughly four lightbox-width images or a screenful of thumbnails.
pub const DEFAULT_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Minimum cache size in bytes (8 MB).
pub const MIN_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// Maximum cache size in bytes (128 MB).
pub const MAX_CACHE_BYTES: usize = 128 * 1024 * 1024;

/// Default maximum number of cached images.
pub const DEFAULT_MAX_ENTRIES: usize = 16;

/// Minimum entries to cache.
pub const MIN_MAX_ENTRIES: usize = 4;

/// Maximum entries to cache.
pub const MAX_MAX_ENTRIES: usize = 64;

/// Configuration for the image cache.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,

    /// Maximum number of images to cache.
    pub max_entries: usize,

    /// Whether caching (and with it prefetch reuse) is enabled.
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_CACHE_BYTES,
            max_entries: DEFAULT_MAX_ENTRIES,
            enabled: true,
        }
    }
}

impl CacheConfig {
    /// Creates a configuration with the given limits, clamped to the
    /// supported ranges.
    #[must_use]
    pub fn new(max_bytes: usize, max_entries: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_CACHE_BYTES, MAX_CACHE_BYTES),
            max_entries: max_entries.clamp(MIN_MAX_ENTRIES, MAX_MAX_ENTRIES),
            enabled: true,
        }
    }

    /// Creates a disabled configuration.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

/// Cached entry with its size for byte accounting.
#[derive(Debug, Clone)]
struct CacheEntry {
    image: FetchedImage,
    size_bytes: usize,
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of images currently in cache.
    pub entry_count: usize,

    /// Total bytes currently used by cached images.
    pub total_bytes: usize,

    /// Number of cache hits (image found).
    pub hits: u64,

    /// Number of cache misses (image not found).
    pub misses: u64,

    /// Number of images evicted due to limits.
    pub evictions: u64,

    /// Number of images inserted.
    pub insertions: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache of decoded images keyed by display URL.
pub struct ImageCache {
    cache: LruCache<String, CacheEntry>,
    config: CacheConfig,
    current_bytes: usize,
    stats: CacheStats,
}

impl ImageCache {
    /// Creates a cache with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_MAX_ENTRIES` is zero, which would indicate a
    /// build configuration error.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(
            NonZeroUsize::new(DEFAULT_MAX_ENTRIES).expect("DEFAULT_MAX_ENTRIES must be non-zero"),
        );

        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Creates a cache with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Inserts an image keyed by its display URL.
    ///
    /// Returns `true` if the image was inserted, `false` if caching is
    /// disabled or the image is too large to ever fit.
    pub fn insert(&mut self, image: FetchedImage) -> bool {
        if !self.config.enabled {
            return false;
        }

        let size_bytes = image.size_bytes;

        // Don't cache images larger than half the cache size
        if size_bytes > self.config.max_bytes / 2 {
            return false;
        }

        // Evict images until we have room
        while self.current_bytes + size_bytes > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        // Replacing an existing URL must not double-count its bytes
        if let Some(existing) = self.cache.pop(&image.url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        self.current_bytes += size_bytes;
        // `push` hands back the entry it displaced at capacity, which keeps
        // the byte accounting exact.
        if let Some((_, displaced)) = self
            .cache
            .push(image.url.clone(), CacheEntry { image, size_bytes })
        {
            self.current_bytes = self.current_bytes.saturating_sub(displaced.size_bytes);
            self.stats.evictions += 1;
        }
        self.stats.insertions += 1;
        self.stats.entry_count = self.cache.len();
        self.stats.total_bytes = self.current_bytes;

        true
    }

    /// Gets an image by display URL, updating LRU order on a hit.
    ///
    /// The returned clone is cheap; the pixel data behind the handle is
    /// reference-counted.
    pub fn get(&mut self, url: &str) -> Option<FetchedImage> {
        if !self.config.enabled {
            return None;
        }

        if let Some(entry) = self.cache.get(url) {
            self.stats.hits += 1;
            Some(entry.image.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Checks for a URL without updating LRU order.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        if !self.config.enabled {
            return false;
        }
        self.cache.contains(url)
    }

    /// Filters `urls` down to those not already cached.
    #[must_use]
    pub fn urls_to_prefetch(&self, urls: &[String]) -> Vec<String> {
        if !self.config.enabled {
            return Vec::new();
        }

        urls.iter()
            .filter(|url| !self.cache.contains(url.as_str()))
            .cloned()
            .collect()
    }

    /// Clears all cached images.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
        self.stats.entry_count = 0;
        self.stats.total_bytes = 0;
    }

    /// Returns the current cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the current memory usage in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("enabled", &self.config.enabled)
            .field("entry_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_entries", &self.config.max_entries)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(url: &str, width: u32, height: u32) -> FetchedImage {
        let rgba = vec![0u8; (width * height * 4) as usize];
        FetchedImage::from_rgba(url.to_string(), width, height, rgba)
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = ImageCache::with_defaults();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.memory_usage(), 0);
    }

    #[test]
    fn insert_and_get_round_trip() {
        let mut cache = ImageCache::with_defaults();
        assert!(cache.insert(test_image("https://cdn/a?w=800&fm=webp", 100, 100)));

        let hit = cache.get("https://cdn/a?w=800&fm=webp").unwrap();
        assert_eq!(hit.width, 100);
        assert!(cache.get("https://cdn/a?w=1920&fm=webp").is_none());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.insertions, 1);
    }

    #[test]
    fn same_asset_at_two_widths_is_two_entries() {
        let mut cache = ImageCache::with_defaults();
        cache.insert(test_image("https://cdn/a?w=800&fm=webp", 10, 10));
        cache.insert(test_image("https://cdn/a?w=1920&fm=webp", 20, 20));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn reinserting_a_url_does_not_double_count_bytes() {
        let mut cache = ImageCache::with_defaults();
        cache.insert(test_image("https://cdn/a?w=800&fm=webp", 100, 100));
        let first_usage = cache.memory_usage();
        cache.insert(test_image("https://cdn/a?w=800&fm=webp", 100, 100));
        assert_eq!(cache.memory_usage(), first_usage);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn byte_limit_evicts_least_recently_used() {
        // Three 4 MB images in an 8 MB cache: inserting the third evicts
        // the oldest.
        let config = CacheConfig::new(MIN_CACHE_BYTES, 16);
        let mut cache = ImageCache::new(config);
        // 1024 * 1024 pixels * 4 bytes = 4 MB
        cache.insert(test_image("https://cdn/a", 1024, 1024));
        cache.insert(test_image("https://cdn/b", 1024, 1024));
        cache.insert(test_image("https://cdn/c", 1024, 1024));

        assert!(!cache.contains("https://cdn/a"));
        assert!(cache.contains("https://cdn/b"));
        assert!(cache.contains("https://cdn/c"));
        assert_eq!(cache.stats().evictions, 1);
        assert!(cache.memory_usage() <= MIN_CACHE_BYTES);
    }

    #[test]
    fn get_refreshes_lru_order() {
        let config = CacheConfig::new(MIN_CACHE_BYTES, 16);
        let mut cache = ImageCache::new(config);
        cache.insert(test_image("https://cdn/a", 1024, 1024));
        cache.insert(test_image("https://cdn/b", 1024, 1024));

        // Touch `a` so `b` becomes the eviction candidate.
        let _ = cache.get("https://cdn/a");
        cache.insert(test_image("https://cdn/c", 1024, 1024));

        assert!(cache.contains("https://cdn/a"));
        assert!(!cache.contains("https://cdn/b"));
    }

    #[test]
    fn oversized_image_is_refused() {
        let config = CacheConfig::new(MIN_CACHE_BYTES, 16);
        let mut cache = ImageCache::new(config);
        // 8 MB cache: refuse anything above 4 MB. 1200x1200x4 ≈ 5.5 MB.
        assert!(!cache.insert(test_image("https://cdn/huge", 1200, 1200)));
        assert!(cache.is_empty());
    }

    #[test]
    fn entry_limit_evicts_before_byte_limit() {
        let config = CacheConfig::new(MAX_CACHE_BYTES, MIN_MAX_ENTRIES);
        let mut cache = ImageCache::new(config);
        for i in 0..6 {
            cache.insert(test_image(&format!("https://cdn/{i}"), 10, 10));
        }
        assert_eq!(cache.len(), MIN_MAX_ENTRIES);
        assert!(!cache.contains("https://cdn/0"));
        assert!(cache.contains("https://cdn/5"));
        // Displaced entries must leave the byte accounting too.
        assert_eq!(cache.memory_usage(), MIN_MAX_ENTRIES * 10 * 10 * 4);
    }

    #[test]
    fn urls_to_prefetch_filters_cached_entries() {
        let mut cache = ImageCache::with_defaults();
        cache.insert(test_image("https://cdn/a", 10, 10));

        let wanted = vec![
            "https://cdn/a".to_string(),
            "https://cdn/b".to_string(),
            "https://cdn/c".to_string(),
        ];
        let missing = cache.urls_to_prefetch(&wanted);
        assert_eq!(missing, vec!["https://cdn/b", "https://cdn/c"]);
    }

    #[test]
    fn disabled_cache_ignores_everything() {
        let mut cache = ImageCache::new(CacheConfig::disabled());
        assert!(!cache.insert(test_image("https://cdn/a", 10, 10)));
        assert!(cache.get("https://cdn/a").is_none());
        assert!(!cache.contains("https://cdn/a"));
        assert!(cache.urls_to_prefetch(&["https://cdn/a".to_string()]).is_empty());
    }

    #[test]
    fn clear_resets_usage() {
        let mut cache = ImageCache::with_defaults();
        cache.insert(test_image("https://cdn/a", 100, 100));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.memory_usage(), 0);
    }

    #[test]
    fn config_clamps_to_supported_ranges() {
        let config = CacheConfig::new(1, 1);
        assert_eq!(config.max_bytes, MIN_CACHE_BYTES);
        assert_eq!(config.max_entries, MIN_MAX_ENTRIES);

        let config = CacheConfig::new(usize::MAX, usize::MAX);
        assert_eq!(config.max_bytes, MAX_CACHE_BYTES);
        assert_eq!(config.max_entries, MAX_MAX_ENTRIES);
    }

    #[test]
    fn hit_rate_is_zero_without_traffic() {
        let cache = ImageCache::with_defaults();
        assert!((cache.stats().hit_rate() - 0.0).abs() < f64::EPSILON);
    }
}
