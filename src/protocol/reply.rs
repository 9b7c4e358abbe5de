use bytes::Bytes;
use serde::{de::DeserializeOwned, Deserialize};

use super::DirEntry;

/// Decoded server reply. Every reply bundles an application error string
/// with its payload; the string is empty when the call succeeded.
pub trait Reply: DeserializeOwned + Send + 'static {
    type Output;

    /// Whether the payload field carries anything
    fn has_payload(&self) -> bool;

    /// Splits the reply into the error string and the payload
    fn into_parts(self) -> (String, Self::Output);
}

/// Reply of `upload`, `mkdir`, `remove` and `cd`: the bare error string
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StatusReply(pub String);

impl Reply for StatusReply {
    type Output = ();

    fn has_payload(&self) -> bool {
        false
    }

    fn into_parts(self) -> (String, Self::Output) {
        (self.0, ())
    }
}

/// Reply of `download`
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DownloadReply {
    pub body: Bytes,
    pub err: String,
}

impl Reply for DownloadReply {
    type Output = Bytes;

    fn has_payload(&self) -> bool {
        !self.body.is_empty()
    }

    fn into_parts(self) -> (String, Self::Output) {
        (self.err, self.body)
    }
}

/// Reply of `list`
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListReply {
    pub entries: Vec<DirEntry>,
    pub err: String,
}

impl Reply for ListReply {
    type Output = Vec<DirEntry>;

    fn has_payload(&self) -> bool {
        !self.entries.is_empty()
    }

    fn into_parts(self) -> (String, Self::Output) {
        (self.err, self.entries)
    }
}

/// Reply of `pwd`
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PwdReply {
    pub path: String,
    pub err: String,
}

impl Reply for PwdReply {
    type Output = String;

    fn has_payload(&self) -> bool {
        !self.path.is_empty()
    }

    fn into_parts(self) -> (String, Self::Output) {
        (self.err, self.path)
    }
}

#[cfg(test)]
mod test_reply {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_status_reply_is_bare_string() {
        let reply: StatusReply = serde_json::from_value(json!("permission denied")).unwrap();
        assert!(!reply.has_payload());
        assert_eq!(reply.into_parts(), ("permission denied".to_owned(), ()));
    }

    #[test]
    fn test_download_reply_fields() {
        let reply: DownloadReply =
            serde_json::from_value(json!({ "Body": b"hello".to_vec(), "Err": "" })).unwrap();
        assert!(reply.has_payload());

        let (err, body) = reply.into_parts();
        assert!(err.is_empty());
        assert_eq!(&body[..], b"hello");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let reply: ListReply = serde_json::from_value(json!({ "Err": "not a directory" })).unwrap();
        assert!(!reply.has_payload());
        assert_eq!(reply.err, "not a directory");

        let reply: PwdReply = serde_json::from_value(json!({})).unwrap();
        assert_eq!(reply, PwdReply::default());
    }

    #[test]
    fn test_list_reply_keeps_order() {
        let reply: ListReply = serde_json::from_value(json!({
            "Entries": [
                { "Name": "b", "IsDir": false },
                { "Name": "..", "IsDir": true },
                { "Name": "a", "IsDir": true },
            ],
            "Err": "",
        }))
        .unwrap();

        let names: Vec<_> = reply.entries.iter().map(DirEntry::file_name).collect();
        assert_eq!(names, ["b", "..", "a"]);
    }
}
