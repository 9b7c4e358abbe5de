mod entry;
mod reply;

use bytes::Bytes;
use serde::Serialize;
use std::fmt;

pub use self::{
    entry::DirEntry,
    reply::{DownloadReply, ListReply, PwdReply, Reply, StatusReply},
};

const UPLOAD: &str = "upload";
const DOWNLOAD: &str = "download";
const LIST: &str = "list";
const MKDIR: &str = "mkdir";
const REMOVE: &str = "remove";
const PWD: &str = "pwd";
const CD: &str = "cd";

/// Remote procedures backing the capability set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    Upload,
    Download,
    List,
    Mkdir,
    Remove,
    Pwd,
    Cd,
}

impl Procedure {
    /// Name under which the server registers the procedure
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Upload => UPLOAD,
            Self::Download => DOWNLOAD,
            Self::List => LIST,
            Self::Mkdir => MKDIR,
            Self::Remove => REMOVE,
            Self::Pwd => PWD,
            Self::Cd => CD,
        }
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Positional argument of a remote call.
///
/// Serializes as the bare value, so a transport may encode
/// `vec![Arg::from("/a"), Arg::from(body)]` the same way it would
/// encode `("/a", body)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Arg {
    Str(String),
    Bytes(Bytes),
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<Bytes> for Arg {
    fn from(value: Bytes) -> Self {
        Self::Bytes(value)
    }
}

#[cfg(test)]
mod test_procedure {
    use super::*;

    #[test]
    fn test_procedure_names() {
        let names: Vec<_> = [
            Procedure::Upload,
            Procedure::Download,
            Procedure::List,
            Procedure::Mkdir,
            Procedure::Remove,
            Procedure::Pwd,
            Procedure::Cd,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        assert_eq!(
            names,
            ["upload", "download", "list", "mkdir", "remove", "pwd", "cd"]
        );
    }

    #[test]
    fn test_arg_serializes_untagged() {
        let args = vec![Arg::from("/a"), Arg::from(Bytes::from_static(b"hi"))];
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value, serde_json::json!(["/a", [104, 105]]));
    }
}
