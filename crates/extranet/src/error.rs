use crate::config::ConfigError;
use crate::partner::admin::AdminError;
use crate::partner::bookings::{BookingFilterError, BookingImportError};
use crate::partner::onboarding::OnboardingError;
use crate::partner::rates::RateError;
use crate::partner::PropertyError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Rates(RateError),
    BookingFilter(BookingFilterError),
    BookingImport(BookingImportError),
    Property(PropertyError),
    Onboarding(OnboardingError),
    Admin(AdminError),
    HotelNotFound(String),
    MarketUnavailable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Rates(err) => write!(f, "rate update rejected: {}", err),
            AppError::BookingFilter(err) => write!(f, "invalid booking filter: {}", err),
            AppError::BookingImport(err) => write!(f, "booking import failed: {}", err),
            AppError::Property(err) => write!(f, "invalid property: {}", err),
            AppError::Onboarding(err) => write!(f, "onboarding error: {}", err),
            AppError::Admin(err) => write!(f, "admin review failed: {}", err),
            AppError::HotelNotFound(id) => write!(f, "hotel '{}' is not in the catalog", id),
            AppError::MarketUnavailable(city) => {
                write!(f, "no market data for '{}' or the fallback city", city)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Rates(err) => Some(err),
            AppError::BookingFilter(err) => Some(err),
            AppError::BookingImport(err) => Some(err),
            AppError::Property(err) => Some(err),
            AppError::Onboarding(err) => Some(err),
            AppError::Admin(err) => Some(err),
            AppError::HotelNotFound(_) | AppError::MarketUnavailable(_) => None,
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Rates(_) | AppError::Property(_) | AppError::Onboarding(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::BookingFilter(_) | AppError::BookingImport(_) => StatusCode::BAD_REQUEST,
            AppError::Admin(_) | AppError::HotelNotFound(_) | AppError::MarketUnavailable(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<RateError> for AppError {
    fn from(value: RateError) -> Self {
        Self::Rates(value)
    }
}

impl From<BookingFilterError> for AppError {
    fn from(value: BookingFilterError) -> Self {
        Self::BookingFilter(value)
    }
}

impl From<BookingImportError> for AppError {
    fn from(value: BookingImportError) -> Self {
        Self::BookingImport(value)
    }
}

impl From<PropertyError> for AppError {
    fn from(value: PropertyError) -> Self {
        Self::Property(value)
    }
}

impl From<OnboardingError> for AppError {
    fn from(value: OnboardingError) -> Self {
        Self::Onboarding(value)
    }
}

impl From<AdminError> for AppError {
    fn from(value: AdminError) -> Self {
        Self::Admin(value)
    }
}
