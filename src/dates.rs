//! "Date added" lookup for directory entries.
//!
//! Hosts differ in whether they record when an entry was added to its
//! directory. The rest of the crate only sees [`AddedDateProvider`]; the
//! shipped [`MetadataDateProvider`] reads the macOS added time where it exists
//! and a configurable filesystem timestamp elsewhere.

use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use tracing::trace;

use crate::config::DateSource;

#[derive(Error, Debug)]
#[error("Could not read {source_kind} date of {}: {source}", path.display())]
pub struct DateLookupError {
    pub path: PathBuf,
    pub source_kind: DateSource,
    #[source]
    pub source: io::Error,
}

/// Resolves when an entry was added to its containing directory.
pub trait AddedDateProvider {
    fn lookup(&self, path: &Path) -> Result<DateTime<Local>, DateLookupError>;
}

/// Provider backed by filesystem metadata of the entry itself (symlinks are
/// not followed).
#[derive(Debug, Clone, Copy)]
pub struct MetadataDateProvider {
    source: DateSource,
}

impl MetadataDateProvider {
    pub fn new(source: DateSource) -> Self {
        Self { source }
    }

    fn read(&self, path: &Path) -> io::Result<SystemTime> {
        match self.source {
            DateSource::Added => added_time(path),
            DateSource::Created => fs::symlink_metadata(path)?.created(),
            DateSource::Modified => fs::symlink_metadata(path)?.modified(),
        }
    }
}

impl AddedDateProvider for MetadataDateProvider {
    fn lookup(&self, path: &Path) -> Result<DateTime<Local>, DateLookupError> {
        let time = self.read(path).map_err(|source| DateLookupError {
            path: path.to_path_buf(),
            source_kind: self.source,
            source,
        })?;

        let local = DateTime::<Local>::from(time);
        trace!(path = ?path, date = %local, "Resolved added date");

        Ok(local)
    }
}

/// `ATTR_CMN_ADDEDTIME` via `getattrlist(2)`.
#[cfg(target_os = "macos")]
fn added_time(path: &Path) -> io::Result<SystemTime> {
    use std::ffi::CString;
    use std::mem;
    use std::os::unix::ffi::OsStrExt;
    use std::time::Duration;

    const ATTR_BIT_MAP_COUNT: u16 = 5;
    const ATTR_CMN_ADDEDTIME: u32 = 0x1000_0000;
    const FSOPT_NOFOLLOW: u32 = 0x0000_0001;

    #[repr(C)]
    struct AttrList {
        bitmapcount: u16,
        reserved: u16,
        commonattr: u32,
        volattr: u32,
        dirattr: u32,
        fileattr: u32,
        forkattr: u32,
    }

    // Attribute data is packed on 4-byte boundaries after the length word
    #[repr(C, packed(4))]
    struct AddedTimeBuf {
        length: u32,
        added: libc::timespec,
    }

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut attrs = AttrList {
        bitmapcount: ATTR_BIT_MAP_COUNT,
        reserved: 0,
        commonattr: ATTR_CMN_ADDEDTIME,
        volattr: 0,
        dirattr: 0,
        fileattr: 0,
        forkattr: 0,
    };
    let mut buf = AddedTimeBuf {
        length: 0,
        added: libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        },
    };

    // SAFETY: both pointers reference live, correctly sized stack values and
    // the buffer size passed matches `buf`.
    let rc = unsafe {
        libc::getattrlist(
            c_path.as_ptr(),
            &mut attrs as *mut AttrList as *mut libc::c_void,
            &mut buf as *mut AddedTimeBuf as *mut libc::c_void,
            mem::size_of::<AddedTimeBuf>(),
            FSOPT_NOFOLLOW,
        )
    };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }

    let length = buf.length as usize;
    if length < mem::size_of::<AddedTimeBuf>() {
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "filesystem does not record the date added",
        ));
    }

    let added = buf.added;
    let secs = u64::try_from(added.tv_sec)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "date added before 1970"))?;
    let nanos = u32::try_from(added.tv_nsec).unwrap_or(0);

    Ok(SystemTime::UNIX_EPOCH + Duration::new(secs, nanos))
}

#[cfg(not(target_os = "macos"))]
fn added_time(_path: &Path) -> io::Result<SystemTime> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "the date added is only recorded on macOS; use --date-source created or modified",
    ))
}
