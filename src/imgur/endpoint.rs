use tracing::instrument;
use url::Url;

use crate::config::GalleryConfig;

const GALLERY_ENDPOINT: &str = "gallery";
const SEARCH: &str = "search";

/// Gallery listing url, or the search url when `search_text` is non-empty.
///
/// `None` when the configured base url does not form a valid url.
#[instrument(skip(config))]
pub fn build_gallery_url(config: &GalleryConfig, search_text: Option<&str>) -> Option<Url> {
    let search_text = search_text.filter(|text| !text.is_empty());

    let section = match search_text {
        Some(_) => SEARCH.to_owned(),
        None => config.section.to_string(),
    };

    let url = format!(
        "{}/{GALLERY_ENDPOINT}/{section}/{}/{}/",
        config.api_root(),
        config.sort,
        config.window
    );

    let mut url = match Url::parse(&url) {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!("Could not build gallery url {}: {}", url, err);
            return None;
        }
    };

    if let Some(text) = search_text {
        url.set_query(Some(&format!("q={}", urlencoding::encode(text))));
    }

    Some(url)
}
