// Storage layer (S3-compatible)

use anyhow::Result;
use async_trait::async_trait;

pub mod s3_client;

pub use s3_client::S3Store;

/// The object store surface the service depends on: list keys by prefix, read
/// an object's bytes, write bytes to a key. Production talks to S3 through
/// [`S3Store`]; tests swap in an in-memory double.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List all object keys starting with `prefix`.
    async fn list(&self, prefix: &str) -> Result<Vec<String>>;

    /// Read the full content of the object at `key`.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Write `data` to `key`, overwriting any existing object.
    async fn put(&self, key: &str, data: &[u8]) -> Result<()>;
}

#[cfg(test)]
pub mod memory {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use anyhow::Result;
    use async_trait::async_trait;

    use super::ObjectStore;

    /// In-memory store double. Counts reads and writes so tests can assert on
    /// call volume, not just final contents.
    #[derive(Default)]
    pub struct MemoryStore {
        objects: Mutex<BTreeMap<String, Vec<u8>>>,
        gets: AtomicUsize,
        puts: AtomicUsize,
        fail_puts: bool,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// A store whose writes always fail, for exercising the 500 path.
        pub fn failing() -> Self {
            Self {
                fail_puts: true,
                ..Self::default()
            }
        }

        pub fn insert(&self, key: &str, data: &[u8]) {
            self.objects
                .lock()
                .unwrap()
                .insert(key.to_string(), data.to_vec());
        }

        pub fn contents(&self, key: &str) -> Option<Vec<u8>> {
            self.objects.lock().unwrap().get(key).cloned()
        }

        pub fn keys(&self) -> Vec<String> {
            self.objects.lock().unwrap().keys().cloned().collect()
        }

        pub fn get_count(&self) -> usize {
            self.gets.load(Ordering::SeqCst)
        }

        pub fn put_count(&self) -> usize {
            self.puts.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ObjectStore for MemoryStore {
        async fn list(&self, prefix: &str) -> Result<Vec<String>> {
            Ok(self
                .objects
                .lock()
                .unwrap()
                .keys()
                .filter(|k| k.starts_with(prefix))
                .cloned()
                .collect())
        }

        async fn get(&self, key: &str) -> Result<Vec<u8>> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            self.objects
                .lock()
                .unwrap()
                .get(key)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no such key: {key}"))
        }

        async fn put(&self, key: &str, data: &[u8]) -> Result<()> {
            if self.fail_puts {
                anyhow::bail!("simulated put failure");
            }
            self.puts.fetch_add(1, Ordering::SeqCst);
            self.objects
                .lock()
                .unwrap()
                .insert(key.to_string(), data.to_vec());
            Ok(())
        }
    }
}
