//! Media storage for the park explorer backend
//!
//! Uploaded profile pictures and gallery items live in an S3 bucket. This
//! crate derives object keys, writes uploads, and lists a user's gallery
//! filtered by media type. Handlers talk to storage through the
//! [`ObjectStore`] trait so the S3 client can be swapped for the in-memory
//! store in tests.

pub mod config;
pub mod error;
pub mod gallery;
pub mod key;
pub mod s3;
pub mod store;
pub mod upload;

pub use config::StorageConfig;
pub use error::{StorageError, StorageResult};
pub use gallery::{GalleryFilter, list_gallery};
pub use key::Folder;
pub use s3::S3ObjectStore;
pub use store::{MemoryObjectStore, ObjectStore, StoredObject};
pub use upload::{MediaUpload, StoredMedia, store_media};
