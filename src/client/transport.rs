use serde::de::DeserializeOwned;
use std::{error::Error as StdError, sync::Arc};

use crate::protocol::Arg;

/// Remote procedure call transport. This is `async_trait`
///
/// Implementations own the connection, the request encoding and the reply
/// decoding. A returned `Err` means the call could not be completed end to
/// end, including when the reply does not decode into `R`.
#[async_trait]
pub trait Transport: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    /// Invokes `procedure` with positional `args` and decodes the reply
    async fn call<R>(&self, procedure: &str, args: Vec<Arg>) -> Result<R, Self::Error>
    where
        R: DeserializeOwned + Send + 'static;
}

#[async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport,
{
    type Error = T::Error;

    async fn call<R>(&self, procedure: &str, args: Vec<Arg>) -> Result<R, Self::Error>
    where
        R: DeserializeOwned + Send + 'static,
    {
        (**self).call(procedure, args).await
    }
}

#[async_trait]
impl<'a, T> Transport for &'a T
where
    T: Transport,
{
    type Error = T::Error;

    async fn call<R>(&self, procedure: &str, args: Vec<Arg>) -> Result<R, Self::Error>
    where
        R: DeserializeOwned + Send + 'static,
    {
        (**self).call(procedure, args).await
    }
}
