use async_trait::async_trait;

use crate::common::LocalPath;
use crate::prelude::*;

/// Capability the model needs from a remote drive.
///
/// Supplied at construction of a [`DriveModel`](crate::drive::DriveModel);
/// implementations talk to the actual remote store (network, auth,
/// pagination) and are free to fail for any provider-specific reason.
/// Those failures are handed to the model's caller untouched.
#[async_trait]
pub trait FileProvider: Send + Sync {
    /// Whether the remote drive is currently reachable.
    fn is_connected_to_remote_drive(&self) -> bool;

    /// All entries directly under `parent_folder_id`.
    async fn provide_files(&self, parent_folder_id: &DriveId) -> Result<Vec<DriveFile>>;

    /// Create a folder named `folder_name` under `parent_folder_id`.
    async fn create_folder(&self, parent_folder_id: &DriveId, folder_name: &str) -> Result<()>;

    /// Upload the local file at `full_file_path` into `parent_folder_id`.
    async fn upload_file(&self, parent_folder_id: &DriveId, full_file_path: &LocalPath)
        -> Result<()>;
}
