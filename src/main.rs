use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use hrms_lite::api::ApiClient;
use hrms_lite::app::App;
use hrms_lite::config::Config;
use hrms_lite::ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log; stdout belongs to the UI
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(base_url = %config.api_base_url, "HRMS Lite client starting...");

    let api = ApiClient::new(&config.api_base_url)?;
    let app = App::new(api);
    ui::run(app).await
}
