use std::fmt::{Display, Formatter};

/// Identifier of an entry in the remote store.
///
/// Opaque to this crate; the provider hands them out and recognizes them
/// again. Stable across calls, unique within the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DriveId(String);

impl DriveId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    /// The conventional alias for the root folder of the remote drive.
    pub fn root() -> DriveId {
        DriveId(String::from("root"))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for DriveId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DriveId> for String {
    fn from(value: DriveId) -> Self {
        value.0
    }
}

impl From<String> for DriveId {
    fn from(value: String) -> Self {
        DriveId(value)
    }
}

impl From<&str> for DriveId {
    fn from(s: &str) -> Self {
        DriveId(String::from(s))
    }
}

impl From<&DriveId> for DriveId {
    fn from(value: &DriveId) -> Self {
        value.clone()
    }
}

impl AsRef<str> for DriveId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
