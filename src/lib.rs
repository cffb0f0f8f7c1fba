//! In-memory model of a remote drive.
//!
//! [`DriveModel`] forwards every operation to an injected [`FileProvider`]
//! and keeps a local cache of the file metadata seen while listing, so
//! entries can be looked up again without another round trip. The actual
//! remote side (auth, transport, pagination) lives behind the provider
//! trait and is not part of this crate.

pub use crate::common::LocalPath;
pub use crate::drive::{DriveFile, DriveId, DriveModel, FileProvider, FileType};

pub mod async_helper;
pub mod common;
pub mod drive;
pub mod prelude;
