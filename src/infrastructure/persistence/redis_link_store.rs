//! Redis-backed link store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, info, warn};

use crate::domain::repositories::{LinkStore, StoreError, StoreResult};

/// Keys requested per `SCAN` round trip.
const SCAN_BATCH: usize = 500;

/// Redis implementation of [`LinkStore`].
///
/// Every short id is stored as a plain string under `<key_prefix><short_id>`.
/// Uses `ConnectionManager` so a dropped connection is re-established
/// transparently. `put_if_absent` maps to `SETNX` and is atomic.
pub struct RedisLinkStore {
    conn: ConnectionManager,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: RedisError) -> StoreError {
    let message = format!("{operation}: {err}");
    if err.is_io_error() || err.is_connection_refusal() || err.is_connection_dropped() {
        StoreError::Unavailable(message)
    } else {
        StoreError::Operation(message)
    }
}

/// Escapes glob metacharacters so the prefix matches literally in `SCAN MATCH`.
fn escape_glob(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl RedisLinkStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `key_prefix` - namespace prepended to every short id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {e}"))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {e}")))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Unavailable(format!("Redis PING failed: {e}")))?;

        info!("Connected to Redis link store");

        Ok(Self {
            conn: manager,
            key_prefix: key_prefix.into(),
        })
    }

    fn build_key(&self, short_id: &str) -> String {
        format!("{}{}", self.key_prefix, short_id)
    }
}

#[async_trait]
impl LinkStore for RedisLinkStore {
    fn backend_name(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value = conn
            .get::<_, Option<String>>(self.build_key(key))
            .await
            .map_err(|e| map_redis_error("GET failed", e))?;

        debug!(short_id = %key, hit = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.build_key(key), value)
            .await
            .map_err(|e| map_redis_error("SET failed", e))
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        let mut conn = self.conn.clone();
        let written = conn
            .set_nx::<_, _, bool>(self.build_key(key), value)
            .await
            .map_err(|e| map_redis_error("SETNX failed", e))?;

        if !written {
            debug!(short_id = %key, "Redis SETNX found existing key");
        }
        Ok(written)
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        let removed = conn
            .del::<_, i64>(self.build_key(key))
            .await
            .map_err(|e| map_redis_error("DEL failed", e))?;

        if removed == 0 {
            warn!(short_id = %key, "Redis DEL removed nothing");
        }
        Ok(())
    }

    async fn list_keys(&self) -> StoreResult<Vec<String>> {
        let mut conn = self.conn.clone();
        let pattern = format!("{}*", escape_glob(&self.key_prefix));
        let mut cursor: u64 = 0;
        let mut keys = Vec::new();

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .map_err(|e| map_redis_error("SCAN failed", e))?;

            keys.extend(
                batch
                    .into_iter()
                    .filter_map(|k| k.strip_prefix(&self.key_prefix).map(str::to_string)),
            );

            if next == 0 {
                break;
            }
            cursor = next;
        }

        // SCAN may return a key more than once across iterations.
        keys.sort_unstable();
        keys.dedup();
        Ok(keys)
    }
}
