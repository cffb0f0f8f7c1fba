pub use anyhow::Result;

pub use crate::drive::{DriveFile, DriveId, FileType};
