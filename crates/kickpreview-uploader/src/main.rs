//! Kick Preview content uploader.
//!
//! Validates a sub-second WAV clip, a cover image, and an info link, uploads
//! the media to object storage, and registers the track with the registry
//! service. Configuration (credentials, bucket, registry URL) comes from the
//! environment; see kickpreview-core.

use anyhow::Context;
use clap::Parser;
use kickpreview_core::Config;
use kickpreview_media::{validate_audio, LinkVerifier};
use kickpreview_storage::create_storage;
use kickpreview_uploader::{init_tracing, IngestionPipeline, RegistryClient, Submission};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "kickpreview-uploader", about = "Kick Preview content uploader")]
struct Cli {
    /// Wave audio file path. Clip length must be under 1 second.
    #[arg(short = 'w', long)]
    wave_file_path: PathBuf,

    /// Image file path. Must be JPG or PNG and at least 500x500 pixels.
    #[arg(short = 'i', long)]
    image_file_path: PathBuf,

    /// Audio title. Example: Artist Name - Track name
    #[arg(short = 't', long)]
    title: String,

    /// Audio info link. Must start with "http".
    #[arg(short = 'l', long)]
    link: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    let cli = Cli::parse();

    // The audio check reports first, before anything else runs; the pipeline
    // re-validates, which is free since the validators are pure.
    validate_audio(&cli.wave_file_path, &config.policy)
        .map_err(|e| anyhow::anyhow!("Audio check failed: {}", e))?;
    println!("OK");

    let storage = create_storage(&config)
        .await
        .context("Failed to create storage backend")?;
    let verifier = LinkVerifier::new(Duration::from_secs(config.http_timeout_secs))
        .context("Failed to create link verifier")?;
    let registry = RegistryClient::from_config(&config)
        .context("Failed to create registry client")?;

    let pipeline = IngestionPipeline::new(config.policy.clone(), verifier, storage, registry);

    let submission = Submission {
        wave_file_path: cli.wave_file_path,
        image_file_path: cli.image_file_path,
        title: cli.title,
        link: cli.link,
    };

    let record = pipeline
        .run(&submission)
        .await
        .map_err(|e| anyhow::anyhow!("Ingestion failed at {} stage: {}", e.stage(), e))?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
