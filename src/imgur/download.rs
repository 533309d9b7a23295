use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::{ok_body, FetchError};

/// Downloads raw image bytes. Downloads run independently of each other and of gallery requests.
pub struct ImageDownloader {
    client: Client,
    in_flight: AtomicUsize,
}

struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(count: &'a AtomicUsize) -> Self {
        count.fetch_add(1, Ordering::SeqCst);
        Self(count)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ImageDownloader {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            in_flight: AtomicUsize::new(0),
        }
    }

    #[instrument(skip(self))]
    pub async fn download_image(&self, url: &str) -> Result<Bytes, FetchError> {
        let url = Url::parse(url)?;

        let _in_flight = InFlight::enter(&self.in_flight);

        let result = match self.client.get(url).send().await {
            Ok(response) => ok_body(response).await,
            Err(err) => Err(err.into()),
        };

        match &result {
            Ok(bytes) => tracing::debug!("Downloaded {} bytes.", bytes.len()),
            Err(err) => tracing::warn!("Image download failed: {}", err),
        }

        result
    }

    /// Number of downloads currently waiting on the network.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}
