use std::str::FromStr;

use mime::Mime;

use crate::drive::FileType;
use crate::prelude::*;

/// Mime type Google Drive reports for folder entries.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Map a raw mime type string from a provider listing to a [`FileType`].
///
/// Convenience for provider implementations; the model itself never looks
/// at mime types.
pub fn file_type_from_mime_type(mime_type: &str) -> Result<FileType> {
    let mime = Mime::from_str(mime_type)?;
    if mime.essence_str() == FOLDER_MIME_TYPE {
        Ok(FileType::Directory)
    } else {
        Ok(FileType::File)
    }
}
