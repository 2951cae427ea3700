pub mod http_client;
pub mod sanitize;

#[cfg(test)]
pub mod mock_http;
