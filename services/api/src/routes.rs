use crate::infra::{AppState, ExtranetState};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use extranet::error::AppError;
use extranet::partner::admin::{
    filter_by_star_rating, leaderboard, review_listing, FleetOverview, LeaderboardEntry,
    ReviewDecision,
};
use extranet::partner::bookings::{
    filter_bookings, BookingFilter, BookingQuery, BookingRecord, BookingStats,
};
use extranet::partner::content::{score_profile, ContentScoreCard};
use extranet::partner::onboarding::{OnboardingDraft, OnboardingProgress};
use extranet::partner::performance::{MarketIntel, PerformanceSummary};
use extranet::partner::rates::{apply_bulk_rate, BulkRateOutcome, RateGrid};
use extranet::partner::{HotelListing, PropertyProfile, StarRating};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeSet;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ContentScoreRequest {
    pub(crate) profile: PropertyProfile,
    /// Edits not yet saved to the profile; each one replaces the stored value.
    #[serde(default)]
    pub(crate) photos: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) amenities: Option<BTreeSet<String>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OnboardingProgressResponse {
    pub(crate) completion_pct: u8,
    pub(crate) step: u8,
    pub(crate) step_label: &'static str,
    pub(crate) flags: OnboardingProgress,
    pub(crate) pending: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OnboardingSubmitResponse {
    pub(crate) property_id: String,
    pub(crate) completion_pct: u8,
}

#[derive(Debug, Serialize)]
pub(crate) struct BookingSearchResponse {
    pub(crate) matched: usize,
    pub(crate) bookings: Vec<BookingRecord>,
    pub(crate) stats: BookingStats,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BulkRateRequest {
    pub(crate) room_type: String,
    pub(crate) days: BTreeSet<u8>,
    pub(crate) rate: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct AdminOverviewResponse {
    pub(crate) overview: FleetOverview,
    pub(crate) leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewRequest {
    pub(crate) decision: ReviewDecision,
}

pub(crate) fn with_partner_routes(state: ExtranetState) -> Router {
    Router::new()
        .route("/api/v1/content/score", post(content_score_endpoint))
        .route("/api/v1/onboarding/progress", post(onboarding_progress_endpoint))
        .route("/api/v1/onboarding/submit", post(onboarding_submit_endpoint))
        .route("/api/v1/bookings/search", post(booking_search_endpoint))
        .route("/api/v1/rates", get(rate_grid_endpoint))
        .route("/api/v1/rates/bulk", post(bulk_rate_endpoint))
        .route("/api/v1/performance", get(performance_endpoint))
        .route("/api/v1/market", get(market_endpoint))
        .route("/api/v1/admin/overview", get(admin_overview_endpoint))
        .route("/api/v1/admin/hotels", get(admin_hotels_endpoint))
        .route(
            "/api/v1/admin/hotels/rating/:stars",
            get(admin_hotels_by_rating_endpoint),
        )
        .route(
            "/api/v1/admin/hotels/:hotel_id/review",
            post(admin_review_endpoint),
        )
        .with_state(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn content_score_endpoint(
    Json(request): Json<ContentScoreRequest>,
) -> Result<Json<ContentScoreCard>, AppError> {
    let ContentScoreRequest {
        mut profile,
        photos,
        description,
        amenities,
    } = request;
    profile.validate()?;

    if let Some(photos) = photos {
        profile.photos = photos;
    }
    if let Some(description) = description {
        profile.description = description;
    }
    if let Some(amenities) = amenities {
        profile.amenities = amenities;
    }

    Ok(Json(score_profile(&profile)))
}

pub(crate) async fn onboarding_progress_endpoint(
    Json(draft): Json<OnboardingDraft>,
) -> Json<OnboardingProgressResponse> {
    let flags = draft.progress();
    Json(OnboardingProgressResponse {
        completion_pct: draft.completion_pct(),
        step: draft.step.index(),
        step_label: draft.step.label(),
        flags,
        pending: flags
            .pending()
            .into_iter()
            .map(|milestone| milestone.label())
            .collect(),
    })
}

pub(crate) async fn onboarding_submit_endpoint(
    State(state): State<ExtranetState>,
    Json(draft): Json<OnboardingDraft>,
) -> Result<(StatusCode, Json<OnboardingSubmitResponse>), AppError> {
    let property_id = draft.submit(state.next_property_serial())?;
    info!(%property_id, completion = draft.completion_pct(), "onboarding submitted");

    Ok((
        StatusCode::CREATED,
        Json(OnboardingSubmitResponse {
            property_id,
            completion_pct: draft.completion_pct(),
        }),
    ))
}

pub(crate) async fn booking_search_endpoint(
    State(state): State<ExtranetState>,
    Json(query): Json<BookingQuery>,
) -> Result<Json<BookingSearchResponse>, AppError> {
    let filter = BookingFilter::try_from(query)?;
    let bookings = filter_bookings(&state.bookings, &filter);

    Ok(Json(BookingSearchResponse {
        matched: bookings.len(),
        bookings,
        stats: BookingStats::tally(&state.bookings),
    }))
}

pub(crate) async fn rate_grid_endpoint(State(state): State<ExtranetState>) -> Json<RateGrid> {
    let grid = state.rates.lock().expect("rate mutex poisoned").clone();
    Json(grid)
}

pub(crate) async fn bulk_rate_endpoint(
    State(state): State<ExtranetState>,
    Json(request): Json<BulkRateRequest>,
) -> Result<Json<BulkRateOutcome>, AppError> {
    let mut guard = state.rates.lock().expect("rate mutex poisoned");
    let (updated, outcome) =
        apply_bulk_rate(&guard, &request.room_type, &request.days, request.rate)?;
    *guard = updated;

    info!(
        room_type = %outcome.room_type,
        rate = outcome.rate,
        days = outcome.days_updated,
        "rates updated"
    );
    Ok(Json(outcome))
}

pub(crate) async fn performance_endpoint(
    State(state): State<ExtranetState>,
) -> Result<Json<PerformanceSummary>, AppError> {
    let hotel = state.hotel()?;
    let series = state
        .performance_for(&hotel.id)
        .ok_or_else(|| AppError::HotelNotFound(hotel.id.clone()))?;
    let market = state.market_for(&hotel.profile.city);
    let lead_rate = hotel.profile.rooms.first().map(|room| room.base_rate);

    Ok(Json(PerformanceSummary::build(series, market, lead_rate)))
}

pub(crate) async fn market_endpoint(
    State(state): State<ExtranetState>,
) -> Result<Json<MarketIntel>, AppError> {
    let hotel = state.hotel()?;
    let lead_rate = hotel.profile.rooms.first().map(|room| room.base_rate);
    let intel = MarketIntel::resolve(&state.market, &hotel.profile.city, lead_rate)
        .ok_or_else(|| AppError::MarketUnavailable(hotel.profile.city.clone()))?;

    Ok(Json(intel))
}

pub(crate) async fn admin_overview_endpoint(
    State(state): State<ExtranetState>,
) -> Json<AdminOverviewResponse> {
    let listings = state.listings.lock().expect("listing mutex poisoned");
    Json(AdminOverviewResponse {
        overview: FleetOverview::from_listings(&listings),
        leaderboard: leaderboard(&listings),
    })
}

pub(crate) async fn admin_hotels_endpoint(
    State(state): State<ExtranetState>,
) -> Json<Vec<HotelListing>> {
    let listings = state.listings.lock().expect("listing mutex poisoned");
    Json(listings.clone())
}

pub(crate) async fn admin_hotels_by_rating_endpoint(
    State(state): State<ExtranetState>,
    Path(stars): Path<u8>,
) -> Result<Json<Vec<HotelListing>>, AppError> {
    let rating = StarRating::new(stars)?;
    let listings = state.listings.lock().expect("listing mutex poisoned");
    let matched = filter_by_star_rating(&listings, Some(rating))
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(matched))
}

pub(crate) async fn admin_review_endpoint(
    State(state): State<ExtranetState>,
    Path(hotel_id): Path<String>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<HotelListing>, AppError> {
    let mut guard = state.listings.lock().expect("listing mutex poisoned");
    let reviewed = review_listing(&guard, &hotel_id, request.decision)?;
    *guard = reviewed;

    let listing = guard
        .iter()
        .find(|listing| listing.id == hotel_id)
        .cloned()
        .ok_or_else(|| AppError::HotelNotFound(hotel_id.clone()))?;
    info!(hotel_id = %listing.id, status = listing.onboarding_status.label(), "listing reviewed");
    Ok(Json(listing))
}
