use search4faces::config::LoggingSettings;
use search4faces::{AsyncSearchClient, ImageInput, Settings};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

async fn read_image(arg: &str) -> std::io::Result<ImageInput> {
    if arg.starts_with("http://") || arg.starts_with("https://") {
        Ok(ImageInput::Url(arg.to_string()))
    } else {
        Ok(ImageInput::Bytes(tokio::fs::read(arg).await?))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(image_arg) = std::env::args().nth(1) else {
        error!("Usage: search4faces <image path or URL>");
        return ExitCode::FAILURE;
    };

    let image = match read_image(&image_arg).await {
        Ok(image) => image,
        Err(e) => {
            error!("Failed to read image {}: {}", image_arg, e);
            return ExitCode::FAILURE;
        }
    };

    let client = match AsyncSearchClient::with_config(settings.client_config()).await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create Search4Faces client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let options = settings.search_options();
    info!("Searching {} for {}", options.source, image_arg);

    let matches = match client.find_similar(image, &options).await {
        Ok(matches) => matches,
        Err(e) => {
            error!("Search failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&matches) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize matches: {}", e);
            ExitCode::FAILURE
        }
    }
}
