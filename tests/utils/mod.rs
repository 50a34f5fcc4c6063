use std::fs;

use wiremock::MockServer;

use steamfront::Client;

/// Convenience func to get a fixture from the standard path, as a string
pub fn fixture(s: &str) -> String {
    fs::read_to_string(format!("test/fixtures/{}", s)).unwrap()
}

/// A client with every steam host pointed at the mock server.
pub fn client(mock: &MockServer, api_key: Option<&str>) -> Client {
    let url = format!("http://{}", mock.address());
    Client::with_urls(api_key, &url, &url, &url)
}
