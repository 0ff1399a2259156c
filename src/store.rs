use crate::imports::*;

/*
    Types:
    * CommandStore - Asynchronous key/value boundary the stager writes through.
      Any JSON-capable durable backend satisfies it; the stager never assumes
      more than put/get/clear.
    * MemoryStore - In-process implementation, used by tests and as the
      default backend.
*/

/// Cache key for a group's command list.
pub fn command_key(group: GroupType) -> String {
    format!("{group}-command")
}

#[async_trait::async_trait]
pub trait CommandStore: Send + Sync + 'static {
    /// Overwrites any prior value under `key`. Last write wins, no merge.
    async fn put(&self, key: &str, value: serde_json::Value) -> Result<()>;

    /// Returns `Ok(None)` for a key never written. A backend failure is an
    /// `Err`, never a silent `None`.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Removes every entry. Callers must never observe a partial reset.
    async fn clear(&self) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct MemoryStore {
    store: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore {
            store: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn keys(&self) -> Vec<String> {
        self.store.read().await.keys().cloned().collect()
    }
}

#[async_trait::async_trait]
impl CommandStore for MemoryStore {
    async fn put(&self, key: &str, value: serde_json::Value) -> Result<()> {
        self.store.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn clear(&self) -> Result<()> {
        self.store.write().await.clear();
        Ok(())
    }
}
