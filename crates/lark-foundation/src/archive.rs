//! Archive restoration for controls persisted as keyed payloads.
//!
//! An [`Archive`] is a flat bag of keyed values decoded on demand. Controls
//! restore themselves with [`FromArchive`]; a nested control restores its
//! wrapped control first, so a failure anywhere aborts the whole
//! construction.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Failure while decoding an [`Archive`].
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("archive key `{key}` is missing")]
    MissingKey { key: String },

    #[error("archive key `{key}` holds a malformed value: {source}")]
    Malformed {
        key: String,
        source: serde_json::Error,
    },

    #[error("archive payload is not a keyed object")]
    NotAnObject,

    #[error("archive payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Keyed archive a control was serialized into.
#[derive(Debug, Clone, Default)]
pub struct Archive {
    entries: Map<String, Value>,
}

impl Archive {
    /// Creates an empty archive, useful for encoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an archive from a JSON object payload.
    pub fn from_json(payload: &str) -> Result<Self, ArchiveError> {
        match serde_json::from_str(payload)? {
            Value::Object(entries) => Ok(Self { entries }),
            _ => Err(ArchiveError::NotAnObject),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Encodes a value under `key`, replacing any existing entry.
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), ArchiveError> {
        let encoded = serde_json::to_value(value).map_err(|source| ArchiveError::Malformed {
            key: key.to_owned(),
            source,
        })?;
        self.entries.insert(key.to_owned(), encoded);
        Ok(())
    }

    /// Decodes the required value stored under `key`.
    pub fn decode<T: DeserializeOwned>(&self, key: &str) -> Result<T, ArchiveError> {
        let value = self.entries.get(key).ok_or_else(|| ArchiveError::MissingKey {
            key: key.to_owned(),
        })?;
        serde_json::from_value(value.clone()).map_err(|source| ArchiveError::Malformed {
            key: key.to_owned(),
            source,
        })
    }

    /// Decodes the value stored under `key`, or `None` when absent.
    ///
    /// A present-but-malformed value is still an error; only absence is
    /// tolerated.
    pub fn decode_opt<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ArchiveError> {
        if self.contains(key) {
            self.decode(key).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Decodes the value stored under `key`, falling back to `default`
    /// when absent.
    pub fn decode_or<T: DeserializeOwned>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, ArchiveError> {
        Ok(self.decode_opt(key)?.unwrap_or(default))
    }
}

/// Restores a value from an [`Archive`].
pub trait FromArchive: Sized {
    fn from_archive(archive: &Archive) -> Result<Self, ArchiveError>;
}
