use anyhow::Result;
use artstory::app::App;
use artstory::export::share_preview;
use artstory::models::{Genre, ImageInput, Length, StorySettings};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "artstory")]
#[command(about = "Generate a story from an artwork image")]
struct CliArgs {
    /// Path to an image file to tell a story about.
    #[arg(value_name = "IMAGE", conflicts_with = "sample")]
    image: Option<PathBuf>,

    /// Use a sample artwork instead of an upload, described by this text.
    #[arg(long, value_name = "DESCRIPTION")]
    sample: Option<String>,

    /// Story genre.
    #[arg(long, default_value = "fantasy", value_parser = clap::value_parser!(Genre))]
    genre: Genre,

    /// Story length.
    #[arg(long, default_value = "medium", value_parser = clap::value_parser!(Length))]
    length: Length,

    /// Directory to export the finished story into.
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,
}

fn image_input_from_args(args: &CliArgs) -> Result<ImageInput> {
    if let Some(alt_text) = &args.sample {
        return Ok(ImageInput::Sample {
            alt_text: alt_text.clone(),
        });
    }

    let path = args
        .image
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Provide an image path or --sample <DESCRIPTION>"))?;

    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());

    Ok(ImageInput::Upload {
        bytes,
        mime_type: None,
        name,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "artstory=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let image = image_input_from_args(&args)?;
    let settings = StorySettings {
        genre: args.genre,
        length: args.length,
    };

    let mut app = App::new(args.export.clone());
    match app.run(image, settings).await {
        Ok(result) => {
            println!("{}\n", result.text);
            info!("Share preview: {}", share_preview(&result.text));
            Ok(())
        }
        Err(e) => {
            error!("Story generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
