pub use drive_id::DriveId;
pub use entry::{DriveFile, FileType};
pub use model::DriveModel;
pub use provider::FileProvider;

mod drive_id;
mod entry;
pub mod helpers;
mod model;
mod provider;
