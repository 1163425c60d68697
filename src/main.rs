use std::io::Write;

use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};

use youtube_meta::{Config, Result, Scraper, SearchResultItem, VideoRecord};

const SEARCH_LIMIT: usize = 5;
const SEPARATOR: &str = "-----------------------------------";

type Input = Lines<BufReader<Stdin>>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
  // logs go to stderr, stdout is reserved for the results
  tracing_subscriber::fmt().with_writer(std::io::stderr).init();

  if let Err(e) = run().await {
    eprintln!("Error during test: {e}");
  }
}

async fn run() -> Result<()> {
  let scraper = Scraper::new(&Config::from_env()?)?;
  let mut input = BufReader::new(stdin()).lines();

  println!("Choose search method:");
  println!("1. Search using a keyword");
  println!("2. Search using a YouTube URL");

  match prompt(&mut input, "Enter your choice (1 or 2): ").await.as_str() {
    "1" => {
      let query = prompt(&mut input, "Enter the search keyword: ").await;
      println!("Searching videos for keyword: \"{query}\"...");
      let videos = scraper.search_videos(&query, SEARCH_LIMIT).await?;
      print_search_results(&videos);
    }
    "2" => {
      let url = prompt(&mut input, "Enter the YouTube URL: ").await;
      println!("Fetching metadata for the provided YouTube URL...");
      let video = scraper.fetch_video_by_url(&url).await?;
      print_video(&video);
    }
    _ => println!("Invalid choice!"),
  }

  Ok(())
}

// a closed or unreadable stdin reads as an empty answer
async fn prompt(input: &mut Input, question: &str) -> String {
  print!("{question}");
  std::io::stdout().flush().ok();

  input
    .next_line()
    .await
    .ok()
    .flatten()
    .map(|line| line.trim().to_owned())
    .unwrap_or_default()
}

fn print_search_results(videos: &[SearchResultItem]) {
  println!("Found {} videos:", videos.len());
  for (i, video) in videos.iter().enumerate() {
    println!("{}. Title: {}", i + 1, video.title);
    println!("   URL: {}", video.url);
    println!("   Video ID: {}", video.video_id);
    println!("   Duration: {}", video.duration);
    println!("   Views: {}", video.views);
    println!("   Uploaded: {}", video.uploaded);
    println!("   Channel Name: {}", video.channel.name);
    println!("   Channel URL: {}", video.channel.url);
    println!("   Likes: {}", video.likes);
    println!("   Thumbnail: {}", video.thumbnail);
    println!("{SEPARATOR}");
  }
}

fn print_video(video: &VideoRecord) {
  println!("{SEPARATOR}");
  println!("Video Metadata:");
  println!("Title: {}", video.title);
  println!("URL: {}", video.url);
  println!("Video ID: {}", video.video_id);
  println!("Duration: {}", video.duration);
  println!("Views: {}", video.views);
  println!("Uploaded: {}", video.uploaded);
  println!("Channel Name: {}", video.channel.name);
  println!("Channel URL: {}", video.channel.url);
  println!("Thumbnail: {}", video.thumbnail);
  println!("{SEPARATOR}");
}
