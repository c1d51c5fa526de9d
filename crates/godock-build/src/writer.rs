use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Permission bits for a newly created Dockerfile.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Writes the rendered Dockerfile to `path`, creating or truncating it.
///
/// The write is not atomic: a failure part way through can leave a
/// truncated file behind.
pub fn write_dockerfile(path: &Path, content: &str) -> Result<(), WriteError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path).map_err(|e| WriteError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    file.write_all(content.as_bytes())
        .map_err(|e| WriteError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %path.display(), bytes = content.len(), "wrote Dockerfile");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to open {path} for writing")]
    Open { path: PathBuf, source: std::io::Error },
    #[error("failed to write {path}")]
    Write { path: PathBuf, source: std::io::Error },
}
