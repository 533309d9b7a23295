use freshshots::{ApiService, GalleryConfig};

const SEARCH_TEXT: &str = "cat";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::fmt().with_file(true).init();

    let config = GalleryConfig::from_env();

    tracing::info!("Requesting gallery from: {}", config.api_root());

    let service = ApiService::new(config);

    match service.gallery_request(Some(SEARCH_TEXT)).await {
        Ok(images) => println!("Received: {} posts", images.len()),
        Err(err) => println!("{err}"),
    }
}
