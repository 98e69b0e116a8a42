// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use crate::analysis::{AnalysisReport, AnalyzeRequest};
use crate::config::AppConfig;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing for the browser front end
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/resume/analyze", data = "<request>")]
pub async fn analyze_resume(
    request: Json<AnalyzeRequest>,
    state: &State<AppState>,
) -> Result<Json<AnalysisReport>, status::Custom<Json<ErrorResponse>>> {
    handlers::analyze_resume_handler(request, state).await
}

#[get("/resume/analyze")]
pub async fn analyze_info() -> Json<serde_json::Value> {
    handlers::analyze_info_handler().await
}

#[get("/health")]
pub async fn health(state: &State<AppState>) -> Json<HealthResponse> {
    handlers::health_handler(state).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Invalid request body".to_string(),
        "BAD_REQUEST".to_string(),
        vec!["Check the field types in your request JSON".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

/// Assemble the Rocket instance; factored out so tests can drive it with a
/// local client
pub fn build_rocket(state: AppState, port: u16) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    rocket::custom(figment)
        .attach(Cors)
        .manage(state)
        .register("/api", catchers![bad_request, unprocessable, internal_error])
        .mount(
            "/api",
            routes![analyze_resume, analyze_info, health, options],
        )
}

/// Load the catalog and serve the API until shutdown
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    let catalog = config.load_catalog().await?;

    info!("Starting resume analysis API server");
    info!("Keyword catalog: {} entries", catalog.len());
    info!("Server: http://0.0.0.0:{}", config.port);

    let _rocket = build_rocket(AppState::new(catalog), config.port)
        .launch()
        .await?;

    Ok(())
}
