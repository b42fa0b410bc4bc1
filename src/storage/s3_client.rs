use anyhow::Result;
use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, Region};

use crate::config::StorageConfig;

use super::ObjectStore;

/// Object store backed by an S3-compatible bucket.
pub struct S3Store {
    bucket: Bucket,
}

impl S3Store {
    pub fn new(config: &StorageConfig) -> Result<Self> {
        let region = match &config.endpoint {
            Some(endpoint) => Region::Custom {
                region: config.region.clone(),
                endpoint: endpoint.clone(),
            },
            None => config.region.parse()?,
        };

        // With no explicit keys, rust-s3 falls back to the usual AWS
        // credential chain (env, profile, instance metadata)
        let credentials = Credentials::new(
            config.access_key_id.as_deref(),
            config.secret_access_key.as_deref(),
            None,
            None,
            None,
        )?;

        let mut bucket = Bucket::new(&config.bucket, region, credentials)?;
        if config.endpoint.is_some() {
            // MinIO and other custom endpoints need path-style addressing
            bucket = bucket.with_path_style();
        }

        Ok(Self { bucket })
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let pages = self.bucket.list(prefix.to_string(), None).await?;
        Ok(pages
            .into_iter()
            .flat_map(|page| page.contents)
            .map(|object| object.key)
            .collect())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let response = self.bucket.get_object(key).await?;
        Ok(response.bytes().to_vec())
    }

    async fn put(&self, key: &str, data: &[u8]) -> Result<()> {
        self.bucket.put_object(key, data).await?;
        Ok(())
    }
}
