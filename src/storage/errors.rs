use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access account records at [{}]: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Failed to read account records from [{}]: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error
    },
    #[error("Failed to write account records to [{}]: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error
    }
}
