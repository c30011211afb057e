//! Capability-scoped filesystem helpers.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

/// Opens the directory containing `path` and returns it with the file name.
///
/// A bare file name resolves against the current directory.
pub(crate) fn open_parent_dir(path: &Utf8Path) -> io::Result<(Dir, &str)> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("path '{path}' must include a file name"),
        )
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Reads `path` to a string, returning `None` when it does not exist.
pub(crate) fn read_optional(path: &Utf8Path) -> io::Result<Option<String>> {
    let (dir, file_name) = match open_parent_dir(path) {
        Ok(opened) => opened,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };
    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

/// Replaces `path` with `contents` by writing a sibling temporary file and
/// renaming it into place.
pub(crate) fn write_atomic(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    let (dir, file_name) = open_parent_dir(path)?;
    let staging_name = format!(".{file_name}.tmp");
    dir.write(&staging_name, contents)?;
    if let Err(err) = dir.rename(&staging_name, &dir, file_name) {
        if let Err(cleanup) = dir.remove_file(&staging_name) {
            tracing::debug!(
                error = %cleanup,
                staging = %staging_name,
                "staging file cleanup failed"
            );
        }
        return Err(err);
    }
    Ok(())
}
