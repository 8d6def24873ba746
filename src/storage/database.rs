//! Content-addressable object database for Jot
//!
//! Objects live under `objects/<2-hex>/<38-hex>`, zstd-compressed. Writes go
//! through a uniquely named temporary file in the target subdirectory and are
//! published with a single atomic rename, so a partially written object is
//! never visible at the permanent path. Because content for one id is always
//! identical, concurrent writers of the same object need no locking: the
//! loser of the rename race simply discards its copy.

use crate::core::error::{JotError, Result};
use crate::core::object::Object;
use crate::core::oid::ObjectId;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

/// Zstd compression level for stored objects (0 selects the default)
const COMPRESSION_LEVEL: i32 = 0;

/// Where serialized objects go once hashed. The filesystem database
/// implements this; tests use an in-memory fake.
pub trait ObjectStore {
    /// Persist an object and return its content address. Storing an object
    /// that is already present is a no-op.
    fn store(&self, object: &Object) -> Result<ObjectId>;
}

/// Filesystem-backed object database
pub struct Database {
    objects_path: PathBuf,
}

impl Database {
    /// Create a database rooted at the given `objects` directory
    pub fn new(objects_path: impl Into<PathBuf>) -> Self {
        Self {
            objects_path: objects_path.into(),
        }
    }

    /// Path of the objects directory
    pub fn objects_path(&self) -> &Path {
        &self.objects_path
    }

    /// Fan-out location for an id: first two hex chars name the
    /// subdirectory, the rest name the file
    pub fn object_path(&self, oid: &ObjectId) -> PathBuf {
        let hex = oid.to_hex();
        self.objects_path.join(&hex[0..2]).join(&hex[2..])
    }

    fn write_object(&self, oid: &ObjectId, serialized: &[u8]) -> Result<()> {
        let final_path = self.object_path(oid);
        let dir = final_path
            .parent()
            .ok_or_else(|| JotError::object_write_failed(oid.to_hex(), "no parent directory"))?;
        fs::create_dir_all(dir)?;

        let compressed = zstd::encode_all(serialized, COMPRESSION_LEVEL).map_err(|e| {
            JotError::CompressionFailed {
                reason: e.to_string(),
            }
        })?;

        // Temp file lives in the target directory so the rename never
        // crosses a filesystem boundary.
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(&compressed)?;
        temp.flush()?;

        match temp.persist(&final_path) {
            Ok(_) => Ok(()),
            // Lost the rename race to a writer of the same oid; the
            // published bytes are identical, so this write is redundant.
            Err(err) if final_path.exists() => {
                trace!(oid = %oid, "discarding redundant object write: {}", err.error);
                Ok(())
            }
            Err(err) => Err(JotError::object_write_failed(
                oid.to_hex(),
                err.error.to_string(),
            )),
        }
    }
}

impl ObjectStore for Database {
    fn store(&self, object: &Object) -> Result<ObjectId> {
        let serialized = object.serialize();
        let oid = crate::core::oid::sha1(&serialized);

        let final_path = self.object_path(&oid);
        if final_path.exists() {
            trace!(oid = %oid, kind = object.kind(), "object already stored");
            return Ok(oid);
        }

        self.write_object(&oid, &serialized)?;
        debug!(
            oid = %oid,
            kind = object.kind(),
            size = serialized.len(),
            "stored object"
        );
        Ok(oid)
    }
}
