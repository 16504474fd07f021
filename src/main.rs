use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use channel_analytics::analysis::analyze;
use channel_analytics::output::write_csv;
use channel_analytics::utils::format_duration;
use channel_analytics::{AppConfig, ChannelExtractor};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    print!("Enter the full URL of the YouTube channel: ");
    io::stdout().flush()?;

    let mut channel_url = String::new();
    io::stdin().read_line(&mut channel_url)?;
    let channel_url = channel_url.trim();

    let config = AppConfig::from_env();
    let extractor = ChannelExtractor::new(&config)?;

    let records = match extractor.extract_channel(channel_url).await {
        Ok(records) => records,
        Err(e) => {
            println!("Failed to extract channel videos: {}", e);
            Vec::new()
        }
    };

    if records.is_empty() {
        println!("No video data to analyze.");
        return Ok(());
    }

    let analysis = analyze(&records);
    if let (Some(views), Some(likes), Some(duration), Some(subscribers)) = (
        analysis.average_views,
        analysis.average_likes,
        analysis.average_duration,
        analysis.average_subscriber_count,
    ) {
        println!("Average Views: {:.2}", views);
        println!("Average Likes: {:.2}", likes);
        println!(
            "Average Duration: {} ({:.2} seconds)",
            format_duration(duration as u64),
            duration
        );
        println!("Average Subscriber Count: {:.2}", subscribers);
    }

    write_csv(Path::new(&config.output_path), &records, &analysis)?;
    println!("Data and analysis saved to {}", config.output_path);

    Ok(())
}
