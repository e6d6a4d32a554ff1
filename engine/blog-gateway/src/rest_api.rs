//! REST API endpoints for the BlogGateway
//!
//! This module provides the JSON endpoints for the daily rotation: service
//! metadata, today's window, the full catalog, per-player lookup, and
//! aggregate statistics.

use blog_catalog::{BlogCatalog, BlogRecord};
use chrono::{DateTime, Utc};
use rotation_engine::{DailyWindow, RotationSchedule};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Filter;

/// Fixed next-rotation notice returned with today's window
pub const NEXT_ROTATION_NOTICE: &str = "Tomorrow at midnight UTC";

/// Service metadata returned from the root route
#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,
    pub total_blogs_in_system: usize,
    pub blogs_showing_today: usize,
    pub rotation_info: RotationInfo,
    pub todays_players: Vec<String>,
    pub endpoints: HashMap<String, String>,
}

/// Rotation summary embedded in the root route
#[derive(Debug, Serialize, Deserialize)]
pub struct RotationInfo {
    /// 1-based day within the 7-day cycle
    pub current_day_in_cycle: u32,
    /// ISO date the window was computed for
    pub date: String,
    /// Human-readable 1-based index range (e.g., "16-20"), "None" when empty
    pub blogs_range: String,
}

/// Today's active window
#[derive(Debug, Serialize, Deserialize)]
pub struct DailyBlogsResponse {
    pub date: String,
    pub day_in_cycle: u32,
    pub count: usize,
    pub blogs: Vec<BlogRecord>,
    pub next_rotation: String,
}

/// Full catalog, unfiltered
#[derive(Debug, Serialize, Deserialize)]
pub struct AllBlogsResponse {
    pub message: String,
    pub count: usize,
    pub blogs: Vec<BlogRecord>,
}

/// Aggregate statistics over the catalog and today's window
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_blogs_in_system: usize,
    pub blogs_showing_today: usize,
    pub total_words_all_blogs: u64,
    pub words_in_todays_blogs: u64,
    pub positions: HashMap<String, usize>,
    pub rotation_schedule: String,
}

/// Statistics body when no catalog is loaded
#[derive(Debug, Serialize, Deserialize)]
pub struct EmptyStatsResponse {
    pub total_blogs: usize,
    pub message: String,
}

/// 404 body for a player who exists but is not in today's window
#[derive(Debug, Serialize, Deserialize)]
pub struct NotShowingTodayResponse {
    pub error: String,
    pub message: String,
    pub todays_players: Vec<String>,
}

/// 404 body for a player missing from the catalog entirely
#[derive(Debug, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub error: String,
}

/// Outcome of a name lookup against today's window
#[derive(Debug)]
pub enum PlayerLookup<'a> {
    /// The record is in today's window
    ShowingToday(&'a BlogRecord),
    /// The record exists in the catalog but is not showing today
    NotToday { todays_players: Vec<String> },
    /// No record with this name
    Unknown,
}

/// Build the root-route metadata for the given instant
pub fn home_response(
    catalog: &BlogCatalog,
    schedule: &RotationSchedule,
    at: DateTime<Utc>,
) -> HomeResponse {
    let window = schedule.window_at(at, catalog.len());

    HomeResponse {
        message: "Fantasy Football Blogs API - Daily Rotation".to_string(),
        total_blogs_in_system: catalog.len(),
        blogs_showing_today: window.len(),
        rotation_info: RotationInfo {
            current_day_in_cycle: window.day_in_cycle(),
            date: window.date.format("%Y-%m-%d").to_string(),
            blogs_range: window.range_label(),
        },
        todays_players: todays_player_names(catalog, &window),
        endpoints: endpoint_directory(),
    }
}

/// Build today's window response for the given instant
pub fn daily_blogs_response(
    catalog: &BlogCatalog,
    schedule: &RotationSchedule,
    at: DateTime<Utc>,
) -> DailyBlogsResponse {
    let window = schedule.window_at(at, catalog.len());

    DailyBlogsResponse {
        date: window.date.format("%Y-%m-%d").to_string(),
        day_in_cycle: window.day_in_cycle(),
        count: window.len(),
        blogs: catalog.slice(window.range()).to_vec(),
        next_rotation: NEXT_ROTATION_NOTICE.to_string(),
    }
}

/// Build the full-catalog response
pub fn all_blogs_response(catalog: &BlogCatalog) -> AllBlogsResponse {
    AllBlogsResponse {
        message: "All blogs (admin view)".to_string(),
        count: catalog.len(),
        blogs: catalog.records().to_vec(),
    }
}

/// Build aggregate statistics for the given instant (non-empty catalog)
pub fn stats_response(
    catalog: &BlogCatalog,
    schedule: &RotationSchedule,
    at: DateTime<Utc>,
) -> StatsResponse {
    let window = schedule.window_at(at, catalog.len());
    let daily_blogs = catalog.slice(window.range());

    StatsResponse {
        total_blogs_in_system: catalog.len(),
        blogs_showing_today: window.len(),
        total_words_all_blogs: catalog.total_word_count(),
        words_in_todays_blogs: daily_blogs.iter().map(|record| record.word_count).sum(),
        positions: catalog.position_counts(),
        rotation_schedule: "New 5 blogs every 24 hours".to_string(),
    }
}

/// Resolve a player name against today's window
///
/// The catalog index answers existence; window membership answers whether
/// the record is visible today. The two misses produce distinct 404 bodies.
pub fn lookup_player<'a>(
    catalog: &'a BlogCatalog,
    schedule: &RotationSchedule,
    at: DateTime<Utc>,
    name: &str,
) -> PlayerLookup<'a> {
    let window = schedule.window_at(at, catalog.len());

    match catalog.index_of(name) {
        Some(index) if window.contains(index) => {
            PlayerLookup::ShowingToday(&catalog.records()[index])
        }
        Some(_) => PlayerLookup::NotToday { todays_players: todays_player_names(catalog, &window) },
        None => PlayerLookup::Unknown,
    }
}

/// Names of the players in the given window, in catalog order
fn todays_player_names(catalog: &BlogCatalog, window: &DailyWindow) -> Vec<String> {
    catalog
        .slice(window.range())
        .iter()
        .filter_map(|record| record.player_name.clone())
        .collect()
}

fn endpoint_directory() -> HashMap<String, String> {
    HashMap::from([
        ("/api/blogs".to_string(), "GET - Today's 5 blogs only".to_string()),
        ("/api/blogs/all".to_string(), "GET - All blogs (admin)".to_string()),
        (
            "/api/blogs/<player_name>".to_string(),
            "GET - Specific player (if showing today)".to_string(),
        ),
        ("/api/stats".to_string(), "GET - Statistics".to_string()),
    ])
}

/// Get service metadata and today's rotation summary
pub async fn get_home(
    catalog: Arc<BlogCatalog>,
    schedule: Arc<RotationSchedule>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&home_response(&catalog, &schedule, Utc::now())))
}

/// Get today's blogs only
pub async fn get_daily_blogs(
    catalog: Arc<BlogCatalog>,
    schedule: Arc<RotationSchedule>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&daily_blogs_response(&catalog, &schedule, Utc::now())))
}

/// Get all blogs (admin endpoint)
pub async fn get_all_blogs(
    catalog: Arc<BlogCatalog>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&all_blogs_response(&catalog)))
}

/// Get a specific player's blog, only if it is showing today
pub async fn get_player_blog(
    player_name: String,
    catalog: Arc<BlogCatalog>,
    schedule: Arc<RotationSchedule>,
) -> Result<impl warp::Reply, warp::Rejection> {
    // Path segments arrive percent-encoded; player names contain spaces
    let name = urlencoding::decode(&player_name)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(player_name);

    let reply = match lookup_player(&catalog, &schedule, Utc::now(), &name) {
        PlayerLookup::ShowingToday(record) => {
            warp::reply::with_status(warp::reply::json(record), StatusCode::OK)
        }
        PlayerLookup::NotToday { todays_players } => warp::reply::with_status(
            warp::reply::json(&NotShowingTodayResponse {
                error: "Player not showing today".to_string(),
                message: format!("{name} is not in today's rotation"),
                todays_players,
            }),
            StatusCode::NOT_FOUND,
        ),
        PlayerLookup::Unknown => warp::reply::with_status(
            warp::reply::json(&NotFoundResponse { error: "Player not found".to_string() }),
            StatusCode::NOT_FOUND,
        ),
    };

    Ok(reply)
}

/// Get aggregate statistics
pub async fn get_stats(
    catalog: Arc<BlogCatalog>,
    schedule: Arc<RotationSchedule>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let reply = if catalog.is_empty() {
        warp::reply::json(&EmptyStatsResponse {
            total_blogs: 0,
            message: "No blogs loaded".to_string(),
        })
    } else {
        warp::reply::json(&stats_response(&catalog, &schedule, Utc::now()))
    };

    Ok(reply)
}

/// Create REST API routes
pub fn create_routes(
    catalog: Arc<BlogCatalog>,
    schedule: Arc<RotationSchedule>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let catalog_filter = warp::any().map(move || catalog.clone());
    let schedule_filter = warp::any().map(move || schedule.clone());

    // Service metadata endpoint
    let home = warp::path::end()
        .and(warp::get())
        .and(catalog_filter.clone())
        .and(schedule_filter.clone())
        .and_then(get_home);

    // Today's window endpoint
    let daily_blogs = warp::path("api")
        .and(warp::path("blogs"))
        .and(warp::path::end())
        .and(warp::get())
        .and(catalog_filter.clone())
        .and(schedule_filter.clone())
        .and_then(get_daily_blogs);

    // Full catalog endpoint
    let all_blogs = warp::path("api")
        .and(warp::path("blogs"))
        .and(warp::path("all"))
        .and(warp::path::end())
        .and(warp::get())
        .and(catalog_filter.clone())
        .and_then(get_all_blogs);

    // Player lookup endpoint; must come after the literal "all" route
    let player_blog = warp::path("api")
        .and(warp::path("blogs"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(catalog_filter.clone())
        .and(schedule_filter.clone())
        .and_then(get_player_blog);

    // Statistics endpoint
    let stats = warp::path("api")
        .and(warp::path("stats"))
        .and(warp::path::end())
        .and(warp::get())
        .and(catalog_filter.clone())
        .and(schedule_filter.clone())
        .and_then(get_stats);

    // Health check endpoint
    let health = warp::path("health").and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    });

    home.or(daily_blogs).or(all_blogs).or(player_blog).or(stats).or(health).with(
        warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET", "OPTIONS"]),
    )
}
