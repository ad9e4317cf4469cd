use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::endpoint::StaticFilesEndpoint;
use poem::{listener::TcpListener, middleware::Cors, EndpointExt, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};

use travel_checklist_backend::api::{AuthApi, HealthApi, TravelItemsApi, WeatherApi};
use travel_checklist_backend::config::{init_logging, AppSettings, WeatherConfig};
use travel_checklist_backend::services::{ImageStore, TokenService, WeatherResolver};
use travel_checklist_backend::stores::{CredentialStore, TravelItemStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging();

    let settings = AppSettings::from_env().expect("Failed to load application settings");
    let weather_config = WeatherConfig::from_env().expect("Failed to load weather configuration");

    // Connect to database
    let db: DatabaseConnection = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!(database_url = %settings.database_url, "Connected to database");

    // Run migrations
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database migrations completed");

    // Create stores and services
    let credential_store = Arc::new(CredentialStore::new(db.clone()));
    let item_store = Arc::new(TravelItemStore::new(db.clone()));
    let token_service = Arc::new(TokenService::new(settings.jwt_secret.clone()));
    let image_store = Arc::new(
        ImageStore::new(settings.upload_dir.clone())
            .await
            .expect("Failed to initialize upload directory"),
    );
    let weather_resolver =
        Arc::new(WeatherResolver::new(weather_config).expect("Failed to create weather resolver"));

    // Create API implementations
    let auth_api = AuthApi::new(credential_store.clone(), token_service.clone());
    let items_api = TravelItemsApi::new(
        item_store.clone(),
        image_store.clone(),
        token_service.clone(),
    );
    let weather_api = WeatherApi::new(weather_resolver.clone(), token_service.clone());

    // Create OpenAPI service with API implementations
    let api_service = OpenApiService::new(
        (HealthApi, auth_api, items_api, weather_api),
        "Travel Checklist API",
        "1.0.0",
    )
    .server("http://localhost:3000/api");

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: API under /api, Swagger UI under /swagger, uploaded
    // images served statically under /uploads
    let app = Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .nest(
            "/uploads",
            StaticFilesEndpoint::new(settings.upload_dir.clone()),
        )
        .with(Cors::new());

    tracing::info!(addr = %settings.bind_addr, "Starting server");
    tracing::info!("Swagger UI available at /swagger");

    Server::new(TcpListener::bind(settings.bind_addr.clone()))
        .run(app)
        .await
}
