//! File concatenation (`cat`-style)

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::*;

use crate::error::{Error, Result};

/// Check that every operand is an existing non-directory.
pub fn validate_operands<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => return Err(Error::IsDirectory(path.to_path_buf())),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(Error::access(path, e)),
        }
    }
    Ok(())
}

/// Copy each file to `out` in order and return the number of bytes written.
///
/// All operands are validated before the first byte is written, so a bad
/// operand late in the list produces no partial output.
pub fn concatenate<P: AsRef<Path>, W: Write>(paths: &[P], out: &mut W) -> Result<u64> {
    validate_operands(paths)?;
    let mut written = 0;
    for path in paths {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| Error::access(path, e))?;
        let n = io::copy(&mut file, out).map_err(|e| copy_error(path, e))?;
        debug!("{}: copied {} bytes", path.display(), n);
        written += n;
    }
    out.flush()?;
    Ok(written)
}

// io::copy does not say which side failed; a closed stdout is an output error
fn copy_error(path: &Path, e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::BrokenPipe {
        Error::Io(e)
    } else {
        Error::Access {
            path: PathBuf::from(path),
            source: e,
        }
    }
}
