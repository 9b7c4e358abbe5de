use serde::{Deserialize, Serialize};

/// One child of a listed remote directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirEntry {
    name: String,
    #[serde(default)]
    is_dir: bool,
}

impl DirEntry {
    pub fn new<T: Into<String>>(name: T, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }

    /// Returns the file name for the file that this entry points at.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }
}
