// Repository trait for user preference storage
use async_trait::async_trait;

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
