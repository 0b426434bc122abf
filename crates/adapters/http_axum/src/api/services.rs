//! JSON handlers for the service directory.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use citydir_app::ports::CatalogRepository;
use citydir_domain::catalog::MergeOutcome;
use citydir_domain::service::{OperatingHours, PricingTier, Service};
use citydir_domain::submission::Submission;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for submitting a service.
#[derive(Deserialize)]
pub struct SubmitServiceRequest {
    pub name: String,
    pub category: String,
    pub description: String,
    pub website: String,
    pub city: String,
    #[serde(default)]
    pub localities: Vec<String>,
    #[serde(default)]
    pub operating_hours: Option<OperatingHours>,
    #[serde(default)]
    pub pricing_tiers: Vec<PricingTier>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Body wrapping the services found in a city.
#[derive(Serialize)]
pub struct ServicesBody {
    pub services: Vec<Service>,
}

/// Body wrapping the distinct city list.
#[derive(Serialize)]
pub struct CitiesBody {
    pub cities: Vec<String>,
}

/// Body reporting the submission outcome.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Possible responses from the city query endpoint.
pub enum ByCityResponse {
    Ok(Json<ServicesBody>),
}

impl IntoResponse for ByCityResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the city list endpoint.
pub enum CitiesResponse {
    Ok(Json<CitiesBody>),
}

impl IntoResponse for CitiesResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the name lookup endpoint.
pub enum ByNameResponse {
    Ok(Json<Service>),
}

impl IntoResponse for ByNameResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the submit endpoint.
pub enum SubmitResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /services/{city}`
pub async fn by_city<R>(
    State(state): State<AppState<R>>,
    Path(city): Path<String>,
) -> Result<ByCityResponse, ApiError>
where
    R: CatalogRepository + Send + Sync + 'static,
{
    let services = state.directory.services_in_city(&city).await?;
    Ok(ByCityResponse::Ok(Json(ServicesBody { services })))
}

/// `GET /cities`
pub async fn cities<R>(State(state): State<AppState<R>>) -> Result<CitiesResponse, ApiError>
where
    R: CatalogRepository + Send + Sync + 'static,
{
    let cities = state.directory.all_cities().await?;
    Ok(CitiesResponse::Ok(Json(CitiesBody { cities })))
}

/// `GET /services/by-name/{name}`
pub async fn by_name<R>(
    State(state): State<AppState<R>>,
    Path(name): Path<String>,
) -> Result<ByNameResponse, ApiError>
where
    R: CatalogRepository + Send + Sync + 'static,
{
    let service = state.directory.service_by_name(&name).await?;
    Ok(ByNameResponse::Ok(Json(service)))
}

/// `POST /submit-service`
pub async fn submit<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<SubmitServiceRequest>,
) -> Result<SubmitResponse, ApiError>
where
    R: CatalogRepository + Send + Sync + 'static,
{
    let mut builder = Submission::builder()
        .name(req.name)
        .category(req.category)
        .description(req.description)
        .website(req.website)
        .city(req.city)
        .localities(req.localities)
        .pricing_tiers(req.pricing_tiers)
        .features(req.features);
    if let Some(hours) = req.operating_hours {
        builder = builder.operating_hours(hours);
    }

    let submission = builder.build()?;
    let outcome = state.directory.submit(submission).await?;

    let message = match outcome {
        MergeOutcome::Created => "Service added successfully",
        MergeOutcome::Updated => "Service updated successfully",
    };
    Ok(SubmitResponse::Ok(Json(MessageBody {
        message: message.to_string(),
    })))
}
