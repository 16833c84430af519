//! LearnTube — headless client core for a video-learning app.
//!
//! Entry point: a console demo that exercises the catalog client, the
//! feed manager, the local library, accounts, and theming. Requires a
//! provider API key in `LEARNTUBE_API_KEY`; the database path defaults
//! to the platform data dir and can be overridden with `LEARNTUBE_DB`.

use std::time::Duration;

use learntube::app::App;
use learntube::config::{ApiConfig, API_KEY_VAR};
use learntube::managers::bookmark_manager::BookmarkManagerTrait;
use learntube::managers::saved_video_manager::SavedVideoManagerTrait;
use learntube::services::auth_service::AuthServiceTrait;
use learntube::services::preferences::PreferencesStoreTrait;
use learntube::services::theme_service::ThemeServiceTrait;
use learntube::types::events::FeedEvent;
use learntube::types::theme::Theme;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Hint: export {}=<your provider API key>", API_KEY_VAR);
            std::process::exit(1);
        }
    };

    let db_path = std::env::var("LEARNTUBE_DB").unwrap_or_else(|_| {
        let dir = learntube::platform::get_data_dir();
        let _ = std::fs::create_dir_all(&dir);
        dir.join("learntube.db").to_string_lossy().to_string()
    });

    println!("LearnTube v{} — console demo", env!("CARGO_PKG_VERSION"));
    println!("database: {}", db_path);
    println!();

    let mut app = App::new(&db_path, config, None).expect("failed to initialize app");
    app.startup();

    demo_catalog(&app).await;
    demo_feed(&app).await;
    demo_library(&app);
    demo_accounts(&mut app);
    demo_theme(&mut app);
}

fn section(name: &str) {
    println!("--- {} ---", name);
}

/// Direct catalog calls: trending chart and category list.
async fn demo_catalog(app: &App) {
    section("Catalog");
    match app.catalog.fetch_trending().await {
        Ok(videos) => {
            println!("trending ({} videos):", videos.len());
            for video in videos.iter().take(5) {
                println!("  {} — {}", video.snippet.channel_title, video.snippet.title);
            }
        }
        Err(e) => println!("trending fetch failed: {}", e),
    }
    match app.catalog.fetch_categories().await {
        Ok(categories) => {
            let titles: Vec<&str> = categories.iter().map(|c| c.title.as_str()).collect();
            println!("categories: {}", titles.join(", "));
        }
        Err(e) => println!("category fetch failed: {}", e),
    }
    println!();
}

/// Feed manager: issue a search and wait for its completion event.
async fn demo_feed(app: &App) {
    section("Feed");
    let mut events = app.feed.subscribe();
    app.feed.search("piano lessons");

    match tokio::time::timeout(Duration::from_secs(35), events.recv()).await {
        Ok(Ok(FeedEvent::VideosUpdated)) => {
            let videos = app.feed.videos();
            println!("search \"{}\" returned {} videos", app.feed.search_text(), videos.len());
            if let Some(first) = videos.first() {
                println!("  first: {} ({})", first.snippet.title, first.watch_url());
            }
        }
        Ok(Ok(event)) => println!("feed event: {:?}", event),
        Ok(Err(e)) => println!("feed subscription error: {}", e),
        Err(_) => println!("feed request timed out"),
    }
    println!();
}

/// Local library: bookmark the first feed video and list both collections.
fn demo_library(app: &App) {
    section("Library");
    if let Some(video) = app.feed.videos().first() {
        match app.bookmark_video(video) {
            Ok(id) => println!("bookmarked \"{}\" as {}", video.snippet.title, id),
            Err(e) => println!("bookmark failed: {}", e),
        }
    } else {
        println!("no feed videos to bookmark");
    }

    match app.bookmarks().list() {
        Ok(entries) => println!("bookmarks: {}", entries.len()),
        Err(e) => println!("bookmark list failed: {}", e),
    }
    match app.saved_videos().list_downloaded() {
        Ok(entries) => println!("downloaded videos: {}", entries.len()),
        Err(e) => println!("saved list failed: {}", e),
    }
    println!();
}

/// Accounts: register a demo user (once) and sign in.
fn demo_accounts(app: &mut App) {
    section("Accounts");
    match app.auth.sign_up("demo", "demo@example.com", "demo-password") {
        Ok(_) => println!("registered demo account"),
        Err(e) => println!("sign-up: {}", e),
    }
    match app.sign_in("demo", "demo-password") {
        Ok(true) => println!(
            "signed in as {:?}",
            app.preferences.preferences().logged_in_user
        ),
        Ok(false) => println!("sign-in rejected"),
        Err(e) => println!("sign-in failed: {}", e),
    }
    println!();
}

/// Theming: flip to dark and show the resolved palette.
fn demo_theme(app: &mut App) {
    section("Theme");
    if let Err(e) = app.set_theme(Theme::Dark) {
        println!("theme switch failed: {}", e);
    }
    let palette = app.theme.palette();
    println!(
        "theme {:?}: background {} text {} tint {}",
        app.theme.current(),
        palette.background,
        palette.text,
        palette.tint
    );
}
