use std::ffi::{OsStr, OsString};
use std::ops::Deref;
use std::path::{Path, PathBuf};

//region LocalPath
/// Path to a file on the local machine, as handed to an upload.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct LocalPath(PathBuf);

impl LocalPath {
    /// The final component of the path, without any directory prefix.
    ///
    /// Returns an empty string when the path has no final component
    /// (e.g. `/` or the empty path).
    pub fn base_name(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl From<PathBuf> for LocalPath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for LocalPath {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl From<&PathBuf> for LocalPath {
    fn from(path: &PathBuf) -> Self {
        Self(path.to_path_buf())
    }
}

impl From<String> for LocalPath {
    fn from(path: String) -> Self {
        Self(PathBuf::from(path))
    }
}

impl From<&str> for LocalPath {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

impl From<OsString> for LocalPath {
    fn from(path: OsString) -> Self {
        Self::from(&path)
    }
}

impl From<&OsString> for LocalPath {
    fn from(path: &OsString) -> Self {
        Path::new(path).into()
    }
}

impl<T> AsRef<T> for LocalPath
where
    T: ?Sized,
    <PathBuf as Deref>::Target: AsRef<T>,
{
    fn as_ref(&self) -> &T {
        self.0.deref().as_ref()
    }
}

impl Deref for LocalPath {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
//------------------------------------------

impl From<LocalPath> for PathBuf {
    fn from(value: LocalPath) -> Self {
        value.0
    }
}

impl From<LocalPath> for OsString {
    fn from(value: LocalPath) -> Self {
        value.0.into_os_string()
    }
}

impl<'a> From<&'a LocalPath> for &'a Path {
    fn from(value: &'a LocalPath) -> Self {
        &value.0
    }
}

impl<'a> From<&'a LocalPath> for &'a OsStr {
    fn from(value: &'a LocalPath) -> Self {
        value.0.as_os_str()
    }
}
//endregion
