use kickpreview_core::Config;
use kickpreview_registry::db::{setup_database, TrackRepository};
use kickpreview_registry::routes::setup_routes;
use kickpreview_registry::server::start_server;
use kickpreview_registry::state::AppState;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    kickpreview_registry::init_tracing();

    let config = Config::from_env()?;

    let pool = setup_database(&config).await?;
    let state = AppState::new(TrackRepository::new(pool));

    let app = setup_routes(state);
    start_server(&config, app).await
}
