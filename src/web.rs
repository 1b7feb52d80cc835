use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

use crate::browser::CombinationBrowser;
use crate::grid::{layout_detailed, render_hour_labels, GridCell, GridSurface, HourLabel};
use crate::saved::{schedule_cards, SavedSchedule};
use crate::schedule::Schedule;

// Combinations live in memory only; the backend owns persistence
pub struct AppState {
    pub browser: Mutex<CombinationBrowser>,
    pub surface: Mutex<GridSurface>,
}

impl AppState {
    pub fn new(combinations: Vec<Schedule>) -> Self {
        let browser = CombinationBrowser::new(combinations);
        let mut surface = GridSurface::new();
        render_hour_labels(&mut surface);
        browser.render_current(&mut surface);

        AppState {
            browser: Mutex::new(browser),
            surface: Mutex::new(surface),
        }
    }
}

#[derive(Serialize)]
pub struct LayoutResponse {
    cells: Vec<GridCell>,
    labels: Vec<HourLabel>,
    skipped: usize,
}

#[derive(Serialize)]
pub struct CombinationResponse {
    caption: String,
    index: usize,
    total: usize,
    cells: Vec<GridCell>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("state lock poisoned"))
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> std::result::Result<T, HttpResponse> {
    serde_json::from_slice(body).map_err(|e| {
        HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": format!("Invalid JSON: {}", e)
        }))
    })
}

// Lay out an arbitrary schedule without touching the shared surface
async fn layout_schedule(body: web::Bytes, state: web::Data<AppState>) -> Result<HttpResponse> {
    let schedule: Schedule = match parse_body(&body) {
        Ok(schedule) => schedule,
        Err(response) => return Ok(response),
    };

    let result = layout_detailed(&schedule);
    let labels = lock(&state.surface)?.labels().to_vec();

    Ok(HttpResponse::Ok().json(LayoutResponse {
        skipped: result.skipped.len(),
        cells: result.cells,
        labels,
    }))
}

async fn get_labels(state: web::Data<AppState>) -> Result<HttpResponse> {
    let surface = lock(&state.surface)?;
    Ok(HttpResponse::Ok().json(surface.labels()))
}

// Replace the loaded combinations
async fn upload_combinations(body: web::Bytes, state: web::Data<AppState>) -> Result<HttpResponse> {
    let combinations: Vec<Schedule> = match parse_body(&body) {
        Ok(combinations) => combinations,
        Err(response) => return Ok(response),
    };

    let total = combinations.len();
    let mut browser = lock(&state.browser)?;
    *browser = CombinationBrowser::new(combinations);
    browser.render_current(&mut *lock(&state.surface)?);
    info!("Loaded {} schedule combinations", total);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "total": total
    })))
}

fn combination_response(browser: &CombinationBrowser, surface: &GridSurface) -> HttpResponse {
    if browser.is_empty() {
        return HttpResponse::NotFound().json(serde_json::json!({"error": browser.caption()}));
    }

    HttpResponse::Ok().json(CombinationResponse {
        caption: browser.caption(),
        index: browser.index(),
        total: browser.len(),
        cells: surface.cells().to_vec(),
    })
}

async fn current_combination(state: web::Data<AppState>) -> Result<HttpResponse> {
    let browser = lock(&state.browser)?;
    let surface = lock(&state.surface)?;
    Ok(combination_response(&browser, &surface))
}

async fn step_combination(direction: web::Path<String>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut browser = lock(&state.browser)?;
    let mut surface = lock(&state.surface)?;

    let moved = match direction.as_str() {
        "next" => browser.next(),
        "previous" => browser.previous(),
        _ => return Ok(HttpResponse::BadRequest().json(serde_json::json!({"error": "Invalid direction"}))),
    };
    if moved {
        browser.render_current(&mut surface);
    }

    Ok(combination_response(&browser, &surface))
}

async fn saved_cards(body: web::Bytes) -> Result<HttpResponse> {
    let saved: Vec<SavedSchedule> = match parse_body(&body) {
        Ok(saved) => saved,
        Err(response) => return Ok(response),
    };
    Ok(HttpResponse::Ok().json(schedule_cards(&saved)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/layout", web::post().to(layout_schedule))
        .route("/api/labels", web::get().to(get_labels))
        .route("/api/combinations", web::post().to(upload_combinations))
        .route("/api/combinations/current", web::get().to(current_combination))
        .route("/api/combinations/{direction}", web::post().to(step_combination))
        .route("/api/saved/cards", web::post().to(saved_cards));
}

pub async fn start_server(bind_address: String, port: u16, combinations: Vec<Schedule>) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(combinations));

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((bind_address.as_str(), port))?
    .run()
    .await
}
