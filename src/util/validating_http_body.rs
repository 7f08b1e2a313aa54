use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_core::{ready, Stream};
use hyper::Body;
use pin_project_lite::pin_project;
use sha1::{Digest, Sha1};
use tracing::{trace, warn};

/// This struct wraps an HTTP body, allowing it to be consumed asynchronously without materializing
///  it but at the same time performing validation that requires knowledge of the entire body's
///  data (e.g. SHA1 checksum check).
///
/// The actual contract is to append an (empty) chunk of data to the stream with an error if the
///  validation fails. Once a stream chunk with an error was returned, this stream will stop
///  polling from upstream and is terminated
pin_project! {
    pub struct ValidatingHttpBody {
        #[pin]
        http_body: Body,
        validators: Vec<Box<dyn HttpBodyValidator>>,
        is_failed: bool,
    }
}
impl ValidatingHttpBody {
    pub fn new(http_body: Body, validators: Vec<Box<dyn HttpBodyValidator>>) -> ValidatingHttpBody {
        ValidatingHttpBody {
            http_body,
            validators,
            is_failed: false,
        }
    }
}

impl Stream for ValidatingHttpBody {
    type Item = anyhow::Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.is_failed {
            return Poll::Ready(None);
        }

        let this = self.project();
        let inner = ready!(this.http_body.poll_next(cx));
        match inner {
            Some(Ok(data)) => {
                // available data from the wrapped HTTP body -> pass this on
                for validator in this.validators.iter_mut() {
                    validator.add_data(&data);
                }
                Poll::Ready(Some(Ok(data)))
            }
            None => {
                // wrapped HTTP body is fully drained -> finalize validation
                match this.validators.iter().find(|v| !v.do_validate()) {
                    None => Poll::Ready(None),
                    Some(failed) => {
                        warn!("{} validation of downloaded data failed", failed.name());
                        *this.is_failed = true;
                        Poll::Ready(Some(Err(anyhow::anyhow!("{} checksum mismatch", failed.name()))))
                    }
                }
            }
            Some(Err(e)) => {
                *this.is_failed = true;
                Poll::Ready(Some(Err(e.into())))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.http_body.size_hint()
    }
}

pub trait HttpBodyValidator: Send {
    fn name(&self) -> &'static str;
    fn add_data(&mut self, data: &Bytes);
    fn do_validate(&self) -> bool;
}

pub struct Sha1HttpBodyValidator {
    hasher: Sha1,
    expected_hash: [u8; 20],
}
impl Sha1HttpBodyValidator {
    pub fn new(expected_hash: [u8; 20]) -> Sha1HttpBodyValidator {
        Sha1HttpBodyValidator {
            hasher: Default::default(),
            expected_hash,
        }
    }
}
impl HttpBodyValidator for Sha1HttpBodyValidator {
    fn name(&self) -> &'static str {
        "SHA1"
    }

    fn add_data(&mut self, data: &Bytes) {
        self.hasher.update(data);
    }

    fn do_validate(&self) -> bool {
        let hash = self.hasher.clone().finalize();
        trace!("validating SHA1 hash");
        hash.as_slice() == self.expected_hash.as_slice()
    }
}

pub struct Md5HttpBodyValidator {
    context: md5::Context,
    expected_hash: [u8; 16],
}
impl Md5HttpBodyValidator {
    pub fn new(expected_hash: [u8; 16]) -> Md5HttpBodyValidator {
        Md5HttpBodyValidator {
            context: md5::Context::new(),
            expected_hash,
        }
    }
}
impl HttpBodyValidator for Md5HttpBodyValidator {
    fn name(&self) -> &'static str {
        "MD5"
    }

    fn add_data(&mut self, data: &Bytes) {
        self.context.consume(data);
    }

    fn do_validate(&self) -> bool {
        let hash = self.context.clone().compute().0;
        trace!("validating MD5 hash");
        hash == self.expected_hash
    }
}
