use reqwest::Client;
use tokio::sync::{oneshot, Mutex};
use tracing::instrument;
use url::Url;

use super::{
    model::{GalleryResponse, ImageEntry},
    ok_body, FetchError,
};
use crate::helper;

/// Fetches gallery listings. Only the latest request started on a fetcher gets its result,
/// earlier ones still in flight resolve with [`FetchError::Superseded`].
pub struct GalleryFetcher {
    client: Client,
    client_id: String,
    current: Mutex<Option<oneshot::Sender<()>>>,
}

impl GalleryFetcher {
    pub fn new(client: Client, client_id: impl Into<String>) -> Self {
        Self {
            client,
            client_id: client_id.into(),
            current: Mutex::new(None),
        }
    }

    #[instrument(skip(self))]
    pub async fn request_gallery_images(
        &self,
        url: Option<Url>,
    ) -> Result<Vec<ImageEntry>, FetchError> {
        let superseded = self.supersede().await;

        let Some(url) = url else {
            return Err(FetchError::InvalidUrl);
        };

        tokio::select! {
            biased;

            _ = superseded => {
                tracing::debug!("Gallery request superseded.");
                Err(FetchError::Superseded)
            }
            result = self.fetch(url) => {
                match &result {
                    Ok(images) => tracing::debug!("Received {} gallery entries.", images.len()),
                    Err(err) => tracing::warn!("Gallery request failed: {}", err),
                }
                result
            }
        }
    }

    /// Registers a new request and signals the previous one, if any, to give up.
    async fn supersede(&self) -> oneshot::Receiver<()> {
        let (sender, receiver) = oneshot::channel();

        if let Some(previous) = self.current.lock().await.replace(sender) {
            // Finished requests have already dropped their receiver.
            let _ = previous.send(());
        }

        receiver
    }

    async fn fetch(&self, url: Url) -> Result<Vec<ImageEntry>, FetchError> {
        let response = self
            .client
            .get(url)
            .headers(helper::headers(&self.client_id)?)
            .send()
            .await?;

        let body = ok_body(response).await?;

        Ok(serde_json::from_slice::<GalleryResponse>(&body)?.data)
    }
}
