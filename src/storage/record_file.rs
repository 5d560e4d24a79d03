use crate::storage::{AccountRecord, Storage, StorageError};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::ffi::OsString;
use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const DELIMITER: u8 = b'|';
const FIELD_COUNT: usize = 4;

/// Flat text file holding one `number|tag|owner|balance` line per account.
///
/// Fields are written verbatim, there is no quoting or escaping, so an owner
/// name must not contain the delimiter or a line break.
#[derive(Debug, Clone)]
pub struct RecordFile {
    path: PathBuf
}

impl RecordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temporary_path(&self) -> PathBuf {
        let mut file_name = self.path.file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("accounts"));
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    fn write_records(&self, path: &Path, records: &[AccountRecord]) -> Result<(), StorageError> {
        let file = File::create(path).map_err(io_error(path))?;

        let mut writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(file);

        for record in records {
            writer.serialize(record).map_err(|source| StorageError::Write {
                path: path.to_path_buf(),
                source
            })?;
        }

        writer.flush().map_err(io_error(path))?;

        let file = writer.into_inner()
            .map_err(|error| StorageError::Io { path: path.to_path_buf(), source: error.into_error() })?;

        //NOTE: The data has to be on disk before the rename makes it visible
        file.sync_all().map_err(io_error(path))
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StorageError + use<> {
    let path = path.to_path_buf();
    move |source| StorageError::Io { path, source }
}

impl Storage for RecordFile {
    fn load(&self) -> Result<Vec<AccountRecord>, StorageError> {
        if !self.path.exists() {
            debug!("No account records at [{}], starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(io_error(&self.path))?;

        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(BufReader::new(file));

        let mut records = Vec::new();

        for result in reader.records() {
            let mut record = match result {
                Ok(record) => record,
                Err(error) if error.is_io_error() => {
                    return Err(StorageError::Read { path: self.path.clone(), source: error });
                }
                Err(error) => {
                    warn!("Skipping unreadable account record: {error}");
                    continue;
                }
            };

            let line = record.position().map_or(0, |position| position.line());

            if record.len() < FIELD_COUNT {
                warn!("Skipping account record on line {line}: expected {FIELD_COUNT} fields, found {}", record.len());
                continue;
            }

            record.truncate(FIELD_COUNT);

            match record.deserialize::<AccountRecord>(None) {
                Ok(account_record) => records.push(account_record),
                Err(error) => {
                    warn!("Skipping malformed account record on line {line}: {error}");
                }
            }
        }

        debug!("Loaded {} account records from [{}]", records.len(), self.path.display());

        Ok(records)
    }

    fn save(&self, records: &[AccountRecord]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        let temporary_path = self.temporary_path();

        if let Err(error) = self.write_records(&temporary_path, records) {
            let _ = fs::remove_file(&temporary_path);
            return Err(error);
        }

        fs::rename(&temporary_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&temporary_path);
            StorageError::Io { path: self.path.clone(), source }
        })?;

        debug!("Saved {} account records to [{}]", records.len(), self.path.display());

        Ok(())
    }
}
