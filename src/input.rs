use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::cup_data::DataFile;
use crate::error::{Error, Result};

pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

static CUP_EXTENSION: &str = "cup";

/// Opens a catalog file, refusing anything that isn't a `.cup` or is over 5MB.
pub fn read_catalog_file<P: AsRef<Path>>(path: P) -> Result<DataFile> {
    let path = path.as_ref();
    let is_cup = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(CUP_EXTENSION));
    if !is_cup {
        return Err(Error::UnsupportedFileType {
            name: path.display().to_string(),
        });
    }

    let file = File::open(path)?;
    let size = file.metadata()?.len();
    if size > MAX_FILE_SIZE {
        return Err(Error::FileTooLarge { size });
    }

    DataFile::from_reader(&mut BufReader::new(file)).map_err(Error::from)
}
