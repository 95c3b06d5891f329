//! Object key derivation
//!
//! Keys have the shape `[<ownerId>/][<folder>/]<randomId>_<originalFilename>`.
//! The random id is a v4 UUID; the filename is used verbatim.

use uuid::Uuid;

/// Stand-in used when the original filename is missing
const UNNAMED_FILE: &str = "file";

/// Destination folder of an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Folder {
    /// Profile picture; the owner's stored profile image follows the upload
    Profile,
    /// Gallery item, listed by the gallery endpoint
    Gallery,
    /// Any other segment, stored as given
    Other(String),
}

impl Folder {
    /// Parse a folder field; empty values mean no folder
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "profile" => Some(Folder::Profile),
            "gallery" => Some(Folder::Gallery),
            other => Some(Folder::Other(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Folder::Profile => "profile",
            Folder::Gallery => "gallery",
            Folder::Other(segment) => segment,
        }
    }
}

/// Build an object key from its parts
pub fn object_key(owner: Option<&str>, folder: Option<&Folder>, id: Uuid, filename: &str) -> String {
    let mut key = String::new();

    if let Some(owner) = owner.filter(|o| !o.is_empty()) {
        key.push_str(owner);
        key.push('/');
    }
    if let Some(folder) = folder {
        key.push_str(folder.as_str());
        key.push('/');
    }

    let filename = if filename.is_empty() {
        UNNAMED_FILE
    } else {
        filename
    };
    key.push_str(&format!("{}_{}", id, filename));
    key
}

/// Build an object key with a fresh random id
pub fn new_object_key(owner: Option<&str>, folder: Option<&Folder>, filename: &str) -> String {
    object_key(owner, folder, Uuid::new_v4(), filename)
}

/// Prefix under which a user's gallery items are stored
pub fn gallery_prefix(owner: &str) -> String {
    format!("{}/{}/", owner, Folder::Gallery.as_str())
}
