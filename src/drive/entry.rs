use std::time::SystemTime;

use crate::drive::DriveId;

/// Kind of a remote entry. Only the directory/non-directory distinction
/// matters to the model; anything finer grained stays provider-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Directory,
    File,
}

/// Metadata of one entry in the remote store, as last reported by the
/// provider. Everything besides `id` and `file_type` is carried through
/// for callers and never inspected by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveFile {
    pub id: DriveId,
    pub file_type: FileType,

    pub name: String,
    pub size: Option<u64>,
    pub mime_type: Option<String>,
    pub modified_time: Option<SystemTime>,
}

impl DriveFile {
    pub fn new(id: impl Into<DriveId>, name: impl Into<String>, file_type: FileType) -> Self {
        Self {
            id: id.into(),
            file_type,
            name: name.into(),
            size: None,
            mime_type: None,
            modified_time: None,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.file_type == FileType::Directory
    }
}
