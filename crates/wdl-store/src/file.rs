use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::traits::StateStore;

/// One put operation in the log.
///
/// On-disk format:
/// ```text
/// [4 bytes: entry length (little-endian u32)]
/// [4 bytes: CRC32 of payload (little-endian u32)]
/// [N bytes: payload (bincode-serialized PutEntry)]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct PutEntry {
    key: String,
    value: Vec<u8>,
}

/// Header size: 4 bytes length + 4 bytes CRC.
const HEADER_SIZE: usize = 8;

/// Writer state and live index behind a single mutex.
///
/// Index and log are updated together under the lock so a reader can never
/// observe a key whose entry has not reached the log.
struct Inner {
    writer: BufWriter<File>,
    /// Current write offset in the log file.
    offset: u64,
    /// Last written value per key.
    index: HashMap<String, Vec<u8>>,
}

/// Durable state store backed by an append-only put log.
///
/// Every `put` is serialized with bincode, framed with a length prefix and a
/// CRC32 checksum, and appended to a single log file. On open the log is
/// replayed front-to-back to rebuild the key index; entries that fail the
/// CRC check are skipped (they represent incomplete/torn writes from a
/// crash), and a truncated tail stops recovery. Last writer wins per key.
pub struct FileStateStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

impl FileStateStore {
    /// Open (or create) a state log at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)?;
        let offset = file.metadata()?.len();

        let index = replay(path)?;
        info!(path = %path.display(), keys = index.len(), "state log opened");

        Ok(Self {
            path: path.to_path_buf(),
            inner: Mutex::new(Inner {
                writer: BufWriter::new(file),
                offset,
                index,
            }),
        })
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("lock poisoned").index.len()
    }

    /// Returns `true` if no key has a value.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().expect("lock poisoned").index.is_empty()
    }

    /// Return a sorted list of all live keys.
    pub fn keys(&self) -> Vec<String> {
        let inner = self.inner.lock().expect("lock poisoned");
        let mut keys: Vec<String> = inner.index.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the log with exactly one entry per live key.
    ///
    /// Overwritten values accumulate in the log until compaction. The
    /// rewrite goes through a scratch buffer and a truncating reopen, so a
    /// crash mid-compaction loses at most the compaction itself.
    pub fn compact(&self) -> StoreResult<()> {
        let mut inner = self.inner.lock().expect("lock poisoned");

        let mut buf = Vec::new();
        let mut keys: Vec<&String> = inner.index.keys().collect();
        keys.sort();
        for key in keys {
            let value = &inner.index[key];
            let payload = encode_entry(key, value)?;
            buf.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            buf.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
            buf.extend_from_slice(&payload);
        }

        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&buf)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;

        inner.offset = buf.len() as u64;
        inner.writer = writer;

        debug!(bytes = inner.offset, keys = inner.index.len(), "log compacted");
        Ok(())
    }
}

fn encode_entry(key: &str, value: &[u8]) -> StoreResult<Vec<u8>> {
    bincode::serialize(&PutEntry {
        key: key.to_owned(),
        value: value.to_vec(),
    })
    .map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Replay the log front-to-back and return the surviving index.
fn replay(path: &Path) -> StoreResult<HashMap<String, Vec<u8>>> {
    let mut file = BufReader::new(File::open(path)?);
    let file_len = file.get_ref().metadata()?.len();
    let mut index = HashMap::new();
    let mut offset: u64 = 0;

    while offset + HEADER_SIZE as u64 <= file_len {
        file.seek(SeekFrom::Start(offset))?;

        let mut header = [0u8; HEADER_SIZE];
        match file.read_exact(&mut header) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }

        let length = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
        let expected_crc = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

        if length == 0 || (offset + HEADER_SIZE as u64 + length as u64) > file_len {
            warn!(offset, length, file_len, "invalid log entry length; stopping recovery");
            break;
        }

        let mut payload = vec![0u8; length as usize];
        match file.read_exact(&mut payload) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                warn!(offset, "truncated log entry; stopping recovery");
                break;
            }
            Err(e) => return Err(e.into()),
        }

        let actual_crc = crc32fast::hash(&payload);
        if actual_crc != expected_crc {
            warn!(
                offset,
                expected = expected_crc,
                actual = actual_crc,
                "CRC mismatch; skipping entry"
            );
            offset += HEADER_SIZE as u64 + length as u64;
            continue;
        }

        match bincode::deserialize::<PutEntry>(&payload) {
            Ok(entry) => {
                index.insert(entry.key, entry.value);
            }
            Err(e) => {
                warn!(offset, error = %e, "failed to deserialize log entry; skipping");
            }
        }

        offset += HEADER_SIZE as u64 + length as u64;
    }

    debug!(recovered = index.len(), "log replay complete");
    Ok(index)
}

impl StateStore for FileStateStore {
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        let payload = encode_entry(key, value)?;
        let length = payload.len() as u32;
        let crc = crc32fast::hash(&payload);

        let mut inner = self.inner.lock().expect("lock poisoned");
        let entry_offset = inner.offset;

        // Header: [length: u32 LE] [crc: u32 LE], then payload.
        inner.writer.write_all(&length.to_le_bytes())?;
        inner.writer.write_all(&crc.to_le_bytes())?;
        inner.writer.write_all(&payload)?;
        inner.writer.flush()?;
        inner.writer.get_ref().sync_all()?;

        inner.offset += HEADER_SIZE as u64 + payload.len() as u64;
        inner.index.insert(key.to_owned(), value.to_vec());

        debug!(offset = entry_offset, key, len = value.len(), "state log append");
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let inner = self.inner.lock().expect("lock poisoned");
        Ok(inner.index.get(key).cloned())
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        let inner = self.inner.lock().expect("lock poisoned");
        Ok(inner.index.contains_key(key))
    }
}

impl std::fmt::Debug for FileStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStateStore")
            .field("path", &self.path)
            .field("entry_count", &self.len())
            .finish()
    }
}
