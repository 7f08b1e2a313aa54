pub mod blob;
pub mod http_client;
pub mod validating_http_body;
