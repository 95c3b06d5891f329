//! Object storage configuration

use std::env;

/// Default region for the media bucket
pub const DEFAULT_REGION: &str = "us-east-1";

/// Configuration for the S3 media bucket
///
/// Every field except the region is optional: a server without a bucket or
/// credentials still starts, but uploads answer with a server error.
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    /// Bucket holding uploaded media
    pub bucket: Option<String>,
    /// AWS access key id
    pub access_key_id: Option<String>,
    /// AWS secret access key
    pub secret_access_key: Option<String>,
    /// AWS region of the bucket
    pub region: String,
}

impl StorageConfig {
    /// Create a new StorageConfig from environment variables
    ///
    /// # Environment Variables
    /// - `S3_BUCKET`: Bucket name
    /// - `AWS_ACCESS_KEY_ID`: Access key id
    /// - `AWS_SECRET_ACCESS_KEY`: Secret access key
    /// - `AWS_REGION`: Region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self {
            bucket: non_empty_var("S3_BUCKET"),
            access_key_id: non_empty_var("AWS_ACCESS_KEY_ID"),
            secret_access_key: non_empty_var("AWS_SECRET_ACCESS_KEY"),
            region: non_empty_var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
        }
    }

    /// Names of the settings that are still missing
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.bucket.is_none() {
            missing.push("S3_BUCKET");
        }
        if self.access_key_id.is_none() {
            missing.push("AWS_ACCESS_KEY_ID");
        }
        if self.secret_access_key.is_none() {
            missing.push("AWS_SECRET_ACCESS_KEY");
        }
        missing
    }

    /// Whether the bucket and both credentials are present
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
