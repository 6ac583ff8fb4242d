//! Writes scaffolded files into the working directory

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{WazctlError, WazctlResult};

/// Write `content` to `path`, refusing to replace an existing file unless
/// `force` is set. New files get mode 0644 on Unix.
pub fn write_scaffold(path: &Path, content: &str, force: bool) -> WazctlResult<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            WazctlError::FileExists {
                path: path.to_path_buf(),
            }
        } else {
            WazctlError::Io(e)
        }
    })?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
