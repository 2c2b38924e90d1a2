use crate::domain::order::OrderRecord;
use crate::domain::ports::OrderStore;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// File name of the order log when none is configured.
pub const DEFAULT_ORDER_LOG: &str = "orders.csv";

/// Append-only CSV order log.
///
/// The header row is written when the file is missing or empty, then one row
/// per order. Appends from this process are serialized by a mutex held only
/// while the row is written, so concurrent requests cannot interleave rows or
/// both write the header. Other processes writing the same file are not
/// coordinated with.
///
/// This struct is cheap to clone; clones share the path and the lock.
#[derive(Clone, Debug)]
pub struct CsvOrderStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl CsvOrderStore {
    /// Opens the order log at `path`. The file itself is created lazily on
    /// the first append.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: Arc::new(path.as_ref().to_path_buf()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OrderStore for CsvOrderStore {
    async fn append(&self, record: &OrderRecord) -> Result<()> {
        let path = Arc::clone(&self.path);
        let lock = Arc::clone(&self.lock);
        let record = record.clone();

        tokio::task::spawn_blocking(move || {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            append_row(&path, &record)
        })
        .await
        .map_err(|e| OrderError::InternalError(Box::new(e)))?
    }
}

fn append_row(path: &Path, record: &OrderRecord) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let needs_header = file.metadata()?.len() == 0;

    // Render the whole row first so it reaches the file in a single write.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(Vec::new());
    writer.serialize(record.to_row())?;
    writer.flush()?;

    file.write_all(writer.get_ref())?;
    file.flush()?;
    debug!(path = %path.display(), header = needs_header, "appended order row");
    Ok(())
}
