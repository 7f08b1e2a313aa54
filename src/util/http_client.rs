use anyhow::anyhow;
use bytes::Bytes;
use hex::FromHex;
use hyper::{Body, Client, HeaderMap, Request, Response, Uri};
use hyper::body::to_bytes;
use hyper::client::HttpConnector;
use hyper::header::{ACCEPT, CONTENT_LENGTH, LOCATION, USER_AGENT};
use hyper_tls::HttpsConnector;
use serde::Deserialize;
use tracing::{debug, trace, warn};
use url::Url;

use crate::util::blob::Blob;
use crate::util::validating_http_body::{HttpBodyValidator, Md5HttpBodyValidator, Sha1HttpBodyValidator, ValidatingHttpBody};

const MAX_REDIRECTS: usize = 5;

/// What to do with checksums that a server sends along with a file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecksumHandling {
    /// fail downloads without a usable SHA1 or MD5 header
    Require,
    #[default]
    VerifyIfPresent,
    Ignore,
}

/// GET requests with a fixed user agent (Maven Central returns a 403 without one).
///
/// Instances do HTTP connection caching internally, so keeping them alive has performance benefits.
pub struct HttpClient {
    client: Client<HttpsConnector<HttpConnector>>,
    user_agent: String,
}
impl HttpClient {
    pub fn new(user_agent: &str) -> HttpClient {
        HttpClient {
            client: Client::builder()
                .build::<_, Body>(HttpsConnector::new()),
            user_agent: user_agent.to_string(),
        }
    }

    fn request(&self, uri: &str, accept: Option<&str>) -> anyhow::Result<Request<Body>> {
        let mut builder = Request::builder()
            .method("GET")
            .uri(Uri::try_from(uri)?)
            .header(USER_AGENT, &self.user_agent);
        if let Some(accept) = accept {
            builder = builder.header(ACCEPT, accept);
        }
        Ok(builder.body(Body::empty())?)
    }

    /// Sends a GET request, following redirects. Returns the first non-redirect response, which
    ///  must have a success status.
    async fn send(&self, uri: &str, accept: Option<&str>) -> anyhow::Result<Response<Body>> {
        let mut current = Url::parse(uri)?;

        for _ in 0..=MAX_REDIRECTS {
            let request = self.request(current.as_str(), accept)?;
            trace!("getting {:?}", request);

            let response = self.client.request(request)
                .await?;
            let status = response.status();

            if status.is_redirection() {
                let location = response.headers().get(LOCATION)
                    .ok_or_else(|| anyhow!("redirect without location: {}", status))?
                    .to_str()?;
                current = current.join(location)?;
                debug!("following redirect ({}) to {}", status, current);
                continue;
            }
            if !status.is_success() {
                return Err(anyhow!("upstream request failed: {}", status));
            }
            return Ok(response);
        }

        Err(anyhow!("more than {} redirects for {}", MAX_REDIRECTS, uri))
    }

    /// Reads the whole response body into memory
    pub async fn get_bytes(&self, uri: &str, accept: &str) -> anyhow::Result<Bytes> {
        let response = self.send(uri, Some(accept)).await?;
        Ok(to_bytes(response.into_body()).await?)
    }

    /// Streams the response body, checking its integrity against the hash codes in the response
    ///  headers
    pub async fn get_blob(&self, uri: &str, checksum_handling: ChecksumHandling) -> anyhow::Result<Blob> {
        let response = self.send(uri, None).await?;

        let content_length = response.headers().get(CONTENT_LENGTH)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok());

        let (sha1, md5) = match checksum_handling {
            ChecksumHandling::Ignore => (None, None),
            _ => expected_checksums(response.headers()),
        };
        if checksum_handling == ChecksumHandling::Require && sha1.is_none() && md5.is_none() {
            return Err(anyhow!("no checksum in response for {}", uri));
        }

        let mut validators: Vec<Box<dyn HttpBodyValidator>> = vec![];
        if let Some(expected_hash) = sha1 {
            validators.push(Box::new(Sha1HttpBodyValidator::new(expected_hash)));
        }
        if let Some(expected_hash) = md5 {
            validators.push(Box::new(Md5HttpBodyValidator::new(expected_hash)));
        }

        Ok(Blob {
            data: Box::pin(ValidatingHttpBody::new(response.into_body(), validators)),
            content_length,
        })
    }
}

fn expected_checksums(headers: &HeaderMap) -> (Option<[u8;20]>, Option<[u8;16]>) {
    let sha1_string = headers.get("x-checksum-sha1")
        .or_else(|| headers.get("x-goog-meta-checksum-sha1"))
        .or_else(|| headers.get("etag"))
        .and_then(|h| h.to_str().ok())
        .map(|s| if s.len() == 42 { &s[1..41] } else { s });

    let md5_string = headers.get("x-checksum-md5")
        .or_else(|| headers.get("x-goog-meta-checksum-md5"))
        .and_then(|h| h.to_str().ok());

    let sha1 = sha1_string.and_then(|s| match <[u8;20]>::from_hex(s) {
        Ok(hash) => Some(hash),
        Err(_) => {
            warn!("ignoring malformed SHA1 checksum header {:?}", s);
            None
        }
    });
    let md5 = md5_string.and_then(|s| match <[u8;16]>::from_hex(s) {
        Ok(hash) => Some(hash),
        Err(_) => {
            warn!("ignoring malformed MD5 checksum header {:?}", s);
            None
        }
    });
    (sha1, md5)
}
