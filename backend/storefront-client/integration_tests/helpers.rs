use storefront_client::StorefrontClient;
use storefront_client::config::StorefrontConfig;
use storefront_client::page::{Navigator, Notifier};

use std::net::TcpListener;
use std::sync::Mutex;
use std::time::Duration;

/// Records what a page would have shown and where it would have gone.
#[derive(Debug, Default)]
pub struct RecordingPage {
    alerts: Mutex<Vec<String>>,
    navigations: Mutex<Vec<String>>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }
}

impl Notifier for RecordingPage {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

impl Navigator for RecordingPage {
    fn assign(&self, path: &str) {
        self.navigations.lock().unwrap().push(path.to_string());
    }
}

pub fn client_for(base_url: &str) -> StorefrontClient {
    StorefrontClient::with_timeout(base_url, Duration::from_secs(5)).unwrap()
}

pub fn config() -> StorefrontConfig {
    StorefrontConfig::default()
}

/// Base URL of a local port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}
