use std::pin::Pin;

use bytes::Bytes;
use futures_core::Stream;

/// A streamed HTTP response body together with what the server announced about it
pub struct Blob {
    pub data: Pin<Box<dyn Stream<Item = anyhow::Result<Bytes>> + Send + 'static>>,
    pub content_length: Option<u64>,
}
