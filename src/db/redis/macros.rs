/// Read-through caching over Redis.
///
/// Looks the key up first; on a miss, runs the provided async block, stores
/// the result in the background, and returns it.
///
/// # Arguments
/// * `$cache`: cache instance with `get_from_cache` and `set_in_background`.
/// * `$key`: the `CacheKey` under which the value lives.
/// * `$ttl`: time-to-live for the cached value in seconds.
/// * `$block`: async block computing the value on a miss.
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        if let Some(cached) = $cache.get_from_cache(&$key).await? {
            Ok(cached)
        } else {
            let value = $block.await?;
            $cache.set_in_background(&$key, &value, $ttl);
            Ok(value)
        }
    }};
}
