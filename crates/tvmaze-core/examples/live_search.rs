use tvmaze_core::TvMazeApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api = TvMazeApi::new()?;

    let term = std::env::args().nth(1).unwrap_or_else(|| "Girls".to_string());
    println!("🔍 Searching for '{}'...\n", term);

    let shows = api.search_shows(&term).await?;

    println!("Found {} shows:", shows.len());
    for (i, show) in shows.iter().enumerate() {
        println!("  {}. {} - ID: {}", i + 1, show.name, show.id);
    }

    if let Some(first) = shows.first() {
        println!("\n📺 Fetching episodes of: {} (ID: {})\n", first.name, first.id);

        let episodes = api.episodes_of_show(first.id).await?;

        for ep in &episodes {
            println!("  {} (season {}, episode {})", ep.name, ep.season, ep.number);
        }

        println!("\n{} episodes in total.", episodes.len());
    }

    Ok(())
}
