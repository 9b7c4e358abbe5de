//! Client side of the remote file store.
//!
//! [`Client`] is the capability set a shell works against. [`RpcClient`]
//! implements it on top of any [`Transport`] by issuing exactly one remote
//! call per capability and classifying the outcome as fatal or recoverable.

mod rpc;
mod transport;

use bytes::Bytes;

pub use rpc::RpcClient;
pub use transport::Transport;

pub use crate::protocol::DirEntry;
use crate::error::Error;

pub type ClientResult<T> = Result<T, Error>;

/// Filesystem-like capabilities of a remote store. This is `async_trait`
///
/// An [`Error::Fatal`] from any method means the session is gone and the
/// caller should stop issuing calls. An [`Error::Application`] leaves the
/// session usable.
#[async_trait]
pub trait Client: Send + Sync {
    /// Stores `body` at `path`, replacing any previous contents.
    async fn upload(&self, path: &str, body: Bytes) -> ClientResult<()>;

    /// Reads the whole file at `path`.
    async fn download(&self, path: &str) -> ClientResult<Bytes>;

    /// Lists the children of `path` in the order the server returns them.
    async fn list(&self, path: &str) -> ClientResult<Vec<DirEntry>>;

    /// Creates a new empty directory.
    async fn mkdir(&self, path: &str) -> ClientResult<()>;

    /// Removes the file or directory at `path`.
    async fn remove(&self, path: &str) -> ClientResult<()>;

    /// Returns the current working directory.
    async fn pwd(&self) -> ClientResult<String>;

    /// Changes the current working directory.
    async fn cd(&self, path: &str) -> ClientResult<()>;
}
