use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{info, Level};

use chat_gateway::{
    api::{
        middleware::RateLimiters,
        router::{create_router, AppState},
    },
    application::{
        ports::{ChatStore, ImageGenerationProvider, TextCompletionProvider},
        use_cases::{
            CreateChatUseCase, DeleteChatUseCase, GetChatUseCase, ListChatsUseCase,
            SendMessageUseCase,
        },
    },
    infrastructure::{
        persistence::InMemoryChatStore,
        providers::{HttpImageGenerationProvider, HttpTextCompletionProvider},
    },
    Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(true)
        .init();

    info!("Starting ChatGateway service");

    // Load configuration
    let config = Config::from_env();
    config.validate().map_err(anyhow::Error::msg)?;
    info!("Configuration loaded and validated");

    // Generated images land here; served back under /uploads
    tokio::fs::create_dir_all(&config.uploads_dir).await?;

    // Initialize infrastructure layer
    let store: Arc<dyn ChatStore> = Arc::new(InMemoryChatStore::new());

    let text_provider: Arc<dyn TextCompletionProvider> =
        Arc::new(HttpTextCompletionProvider::new(
            config.text_provider_api_key.clone(),
            config.text_provider_model.clone(),
            config.text_provider_base_url.clone(),
        ));
    let image_provider: Arc<dyn ImageGenerationProvider> =
        Arc::new(HttpImageGenerationProvider::new(
            config.image_provider_api_key.clone(),
            config.image_provider_model.clone(),
            config.image_provider_base_url.clone(),
            config.uploads_dir.clone(),
        ));

    info!("Infrastructure layer initialized");

    // Initialize use cases (application layer)
    let state = AppState {
        create_chat: Arc::new(CreateChatUseCase::new(Arc::clone(&store))),
        get_chat: Arc::new(GetChatUseCase::new(Arc::clone(&store))),
        list_chats: Arc::new(ListChatsUseCase::new(Arc::clone(&store))),
        delete_chat: Arc::new(DeleteChatUseCase::new(Arc::clone(&store))),
        send_message: Arc::new(SendMessageUseCase::new(
            Arc::clone(&store),
            text_provider,
            image_provider,
        )),
    };

    info!("Application layer initialized");

    // Create router
    let limiters = RateLimiters::new(Duration::from_secs(config.rate_limit_window_secs));
    let app = create_router(state, limiters, &config.uploads_dir);

    // Start server; connect info feeds the per-client rate limiter keys
    info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
