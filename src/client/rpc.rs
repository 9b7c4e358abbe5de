use bytes::Bytes;

use super::{Client, ClientResult, Transport};
use crate::{
    error::{Error, MalformedReply},
    protocol::{Arg, DirEntry, DownloadReply, ListReply, Procedure, PwdReply, Reply, StatusReply},
};

/// Adapter from the [`Client`] capabilities to remote procedure calls.
///
/// Each capability performs exactly one [`Transport::call`]. There is no
/// retry, timeout or cancellation at this layer.
#[derive(Debug, Clone)]
pub struct RpcClient<T> {
    transport: T,
    strict_replies: bool,
}

impl<T> RpcClient<T>
where
    T: Transport,
{
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            strict_replies: false,
        }
    }

    /// Treat a reply that carries both an error and a payload as malformed.
    /// Default: false, the error wins and the payload is discarded
    #[must_use]
    pub const fn with_strict_replies(mut self, strict: bool) -> Self {
        self.strict_replies = strict;
        self
    }

    /// See [`RpcClient::with_strict_replies`]
    pub fn set_strict_replies(&mut self, strict: bool) {
        self.strict_replies = strict;
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    async fn request<R: Reply>(
        &self,
        procedure: Procedure,
        args: Vec<Arg>,
    ) -> ClientResult<R::Output> {
        debug!("calling {procedure} with {} argument(s)", args.len());

        let reply: R = self
            .transport
            .call(procedure.name(), args)
            .await
            .map_err(|err| {
                warn!("{procedure} did not complete: {err}");
                Error::fatal(err)
            })?;

        self.interpret(procedure, reply)
    }

    fn interpret<R: Reply>(&self, procedure: Procedure, reply: R) -> ClientResult<R::Output> {
        let has_payload = reply.has_payload();
        let (err, output) = reply.into_parts();

        if err.is_empty() {
            return Ok(output);
        }

        if has_payload {
            if self.strict_replies {
                warn!("{procedure} reply carries both a payload and an error");
                return Err(MalformedReply {
                    procedure: procedure.name(),
                    reason: format!("payload returned alongside error {err:?}"),
                }
                .into());
            }

            warn!("{procedure} reply carries a payload alongside an error, discarding it");
        }

        debug!("{procedure} rejected: {err}");
        Err(Error::Application(err))
    }
}

#[async_trait]
impl<T> Client for RpcClient<T>
where
    T: Transport,
{
    async fn upload(&self, path: &str, body: Bytes) -> ClientResult<()> {
        self.request::<StatusReply>(Procedure::Upload, vec![path.into(), body.into()])
            .await
    }

    async fn download(&self, path: &str) -> ClientResult<Bytes> {
        self.request::<DownloadReply>(Procedure::Download, vec![path.into()])
            .await
    }

    async fn list(&self, path: &str) -> ClientResult<Vec<DirEntry>> {
        self.request::<ListReply>(Procedure::List, vec![path.into()])
            .await
    }

    async fn mkdir(&self, path: &str) -> ClientResult<()> {
        self.request::<StatusReply>(Procedure::Mkdir, vec![path.into()])
            .await
    }

    async fn remove(&self, path: &str) -> ClientResult<()> {
        self.request::<StatusReply>(Procedure::Remove, vec![path.into()])
            .await
    }

    async fn pwd(&self) -> ClientResult<String> {
        self.request::<PwdReply>(Procedure::Pwd, Vec::new()).await
    }

    async fn cd(&self, path: &str) -> ClientResult<()> {
        self.request::<StatusReply>(Procedure::Cd, vec![path.into()])
            .await
    }
}
