use std::{
    collections::HashMap,
    fmt::{Debug, Formatter},
    sync::{Arc, RwLock},
};

use tracing::{debug, instrument, trace};

use crate::common::LocalPath;
use crate::drive::FileProvider;
use crate::prelude::*;

/// Caller-facing model of a remote drive.
///
/// Every operation forwards to the injected [`FileProvider`]; listing
/// additionally records the returned metadata in a local cache so that
/// synchronous callers can look entries up again without another round
/// trip. The cache is best effort: it only ever grows, and entries go
/// stale when the remote side changes without a re-list.
pub struct DriveModel {
    provider: Arc<dyn FileProvider>,

    /// Last observed metadata per remote id. Only list operations write
    /// here; create/upload do not (callers re-list to observe their effect).
    cached_files: RwLock<HashMap<DriveId, DriveFile>>,
}

impl Debug for DriveModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveModel")
            .field("cached_files", &self.cached_files.read().map(|c| c.len()))
            .finish()
    }
}

impl DriveModel {
    pub fn new(provider: Arc<dyn FileProvider>) -> Self {
        Self {
            provider,
            cached_files: RwLock::new(HashMap::new()),
        }
    }

    pub fn is_connected_to_remote_drive(&self) -> bool {
        self.provider.is_connected_to_remote_drive()
    }

    /// List all entries under `parent_folder_id` and remember their
    /// metadata.
    ///
    /// The provider's sequence is returned unmodified. A provider failure
    /// is returned unchanged and leaves the cache as it was.
    #[instrument(skip(self, parent_folder_id))]
    pub async fn list_files(&self, parent_folder_id: impl Into<DriveId>) -> Result<Vec<DriveFile>> {
        let parent_folder_id = parent_folder_id.into();
        debug!("list_files: {}", parent_folder_id);
        let files = self.provider.provide_files(&parent_folder_id).await?;
        debug!("list_files: got {} entries", files.len());
        self.update_current_info(&files);
        Ok(files)
    }

    /// Like [`Self::list_files`], narrowed to directory entries.
    ///
    /// The full unfiltered listing still lands in the cache.
    #[instrument(skip(self, parent_folder_id))]
    pub async fn list_only_folders(
        &self,
        parent_folder_id: impl Into<DriveId>,
    ) -> Result<Vec<DriveFile>> {
        let mut files = self.list_files(parent_folder_id).await?;
        files.retain(|f| f.is_directory());
        debug!("list_only_folders: {} folders", files.len());
        Ok(files)
    }

    /// Create a folder named `folder_name` under `parent_folder_id`.
    ///
    /// The new folder is not added to the cache; it shows up with the
    /// next listing of its parent.
    #[instrument(skip(self, parent_folder_id))]
    pub async fn create_folder(
        &self,
        parent_folder_id: impl Into<DriveId>,
        folder_name: &str,
    ) -> Result<()> {
        let parent_folder_id = parent_folder_id.into();
        debug!("create_folder: {:?} in {}", folder_name, parent_folder_id);
        self.provider
            .create_folder(&parent_folder_id, folder_name)
            .await
    }

    /// Upload the local file at `full_file_name` into `parent_folder_id`.
    ///
    /// Yields the base name of the uploaded file (computed locally from
    /// the path, not reported by the provider). No cache update.
    #[instrument(skip(self, parent_folder_id, full_file_name))]
    pub async fn upload_file(
        &self,
        parent_folder_id: impl Into<DriveId>,
        full_file_name: impl Into<LocalPath>,
    ) -> Result<String> {
        let parent_folder_id = parent_folder_id.into();
        let full_file_name = full_file_name.into();
        debug!(
            "upload_file: {} into {}",
            full_file_name.display(),
            parent_folder_id
        );
        self.provider
            .upload_file(&parent_folder_id, &full_file_name)
            .await?;
        Ok(full_file_name.base_name())
    }

    /// Snapshot of every cached entry, in no particular order.
    pub fn get_all_drive_files(&self) -> Vec<DriveFile> {
        let cached_files = self.cached_files.read().expect("drive file cache poisoned");
        cached_files.values().cloned().collect()
    }

    /// Cached metadata for `id`, if any listing has reported it so far.
    /// `None` means "never seen", not an error.
    pub fn get_drive_file(&self, id: impl Into<DriveId>) -> Option<DriveFile> {
        let id = id.into();
        let cached_files = self.cached_files.read().expect("drive file cache poisoned");
        cached_files.get(&id).cloned()
    }

    fn update_current_info(&self, files: &[DriveFile]) {
        trace!("update_current_info: {} entries", files.len());
        let mut cached_files = self.cached_files.write().expect("drive file cache poisoned");
        for file in files {
            cached_files.insert(file.id.clone(), file.clone());
        }
    }
}
