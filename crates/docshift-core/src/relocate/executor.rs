//! File operations executor

use std::fs;
use std::io;
use std::path::Path;

use filetime::{FileTime, set_file_times};
use tracing::{debug, info};

use super::RelocationResult;
use super::actions::RelocationAction;
use crate::error::RelocateError;

/// Executes relocation actions, or only reports them in dry-run mode
pub struct FileOperationExecutor {
    dry_run: bool,
}

impl FileOperationExecutor {
    /// Create a new executor
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Execute a relocation action
    ///
    /// # Errors
    ///
    /// Returns an error if a file operation fails. Nothing is recorded in
    /// `result` for the failed action.
    pub fn execute(
        &self,
        action: &RelocationAction,
        result: &mut RelocationResult,
    ) -> Result<(), RelocateError> {
        match action {
            RelocationAction::CopyRootDoc { source, dest } => {
                if self.dry_run {
                    info!("Dry run: Would copy {} to {}", source.display(), dest.display());
                } else {
                    Self::ensure_parent(dest)?;
                    copy_file_with_metadata(source, dest).map_err(|e| RelocateError::Copy {
                        from: source.clone(),
                        to: dest.clone(),
                        source: e,
                    })?;
                    info!("Copied {} to {}", source.display(), dest.display());
                }
                result.copied += 1;
            }
            RelocationAction::Move { source, dest } => {
                if self.dry_run {
                    info!("Dry run: Would move {} to {}", source.display(), dest.display());
                } else {
                    Self::ensure_parent(dest)?;
                    move_file(source, dest).map_err(|e| RelocateError::Move {
                        from: source.clone(),
                        to: dest.clone(),
                        source: e,
                    })?;
                    info!("Moved {} to {}", source.display(), dest.display());
                }
                result.moved += 1;
            }
            RelocationAction::Skip { path, reason } => {
                debug!("Skipping {} ({reason})", path.display());
                result.skipped += 1;
                *result.skip_reasons.entry(*reason).or_insert(0) += 1;
            }
        }
        Ok(())
    }

    /// Create `dir` and its parents if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_dir(&self, dir: &Path) -> Result<(), RelocateError> {
        if dir.is_dir() {
            return Ok(());
        }

        if self.dry_run {
            info!("Dry run: Would create directory {}", dir.display());
            return Ok(());
        }

        fs::create_dir_all(dir).map_err(|e| RelocateError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        info!("Created directory {}", dir.display());
        Ok(())
    }

    fn ensure_parent(dest: &Path) -> Result<(), RelocateError> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| RelocateError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }
}

/// Copy a file with its permissions and access/modification times
///
/// # Errors
///
/// Returns an error if `source` and `dest` are the same file, or if the copy
/// or a metadata update fails.
pub fn copy_file_with_metadata(source: &Path, dest: &Path) -> io::Result<()> {
    if is_same_file(source, dest)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} and {} are the same file",
                source.display(),
                dest.display()
            ),
        ));
    }

    fs::copy(source, dest)?;

    let stat = fs::metadata(source)?;
    fs::set_permissions(dest, stat.permissions())?;
    set_file_times(
        dest,
        FileTime::from_last_access_time(&stat),
        FileTime::from_last_modification_time(&stat),
    )?;

    Ok(())
}

/// Whether both paths resolve to the same file; a missing `dest` never does
fn is_same_file(source: &Path, dest: &Path) -> io::Result<bool> {
    if !dest.exists() {
        return Ok(false);
    }
    Ok(dunce::canonicalize(source)? == dunce::canonicalize(dest)?)
}

/// Move a file, falling back to copy-and-delete across filesystems
///
/// A symlink is moved as a link: the link itself is renamed, or recreated at
/// `dest` on another filesystem, and its target is never touched.
///
/// # Errors
///
/// Returns an error if the rename fails for any reason other than crossing
/// devices, or if the fallback copy or removal fails.
pub fn move_file(source: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            if fs::symlink_metadata(source)?.file_type().is_symlink() {
                copy_symlink(source, dest)?;
            } else {
                copy_file_with_metadata(source, dest)?;
            }
            fs::remove_file(source)
        }
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn copy_symlink(source: &Path, dest: &Path) -> io::Result<()> {
    let target = fs::read_link(source)?;
    std::os::unix::fs::symlink(target, dest)
}

#[cfg(not(unix))]
fn copy_symlink(source: &Path, dest: &Path) -> io::Result<()> {
    copy_file_with_metadata(source, dest)
}
