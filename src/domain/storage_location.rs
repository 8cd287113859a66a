use std::fmt;

/// Bucket and key of one object in the media store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageLocation {
    bucket: String,
    key: String,
}

impl StorageLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }

    /// Parses an `s3://bucket/key` URI as reported by the external registry.
    pub fn from_uri(uri: &str) -> Result<Self, String> {
        let rest = uri
            .strip_prefix("s3://")
            .ok_or_else(|| format!("Unsupported storage URI: {}", uri))?;
        let (bucket, key) = rest
            .split_once('/')
            .ok_or_else(|| format!("Storage URI missing object key: {}", uri))?;
        if bucket.is_empty() || key.is_empty() {
            return Err(format!("Storage URI missing bucket or key: {}", uri));
        }
        Ok(Self::new(bucket, key))
    }

    /// Final path segment of the key without its extension; used to derive the
    /// output artifact name from the input object.
    pub fn file_stem(&self) -> &str {
        let basename = self.key.rsplit('/').next().unwrap_or(&self.key);
        match basename.rfind('.') {
            Some(0) | None => basename,
            Some(idx) => &basename[..idx],
        }
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}
