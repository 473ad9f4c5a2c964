//! HTTP request handlers for the dealership catalog API
//!
//! This module implements all the endpoint logic for:
//! - Listing cars with filtering, sorting and pagination
//! - Aggregating the filter options offered to the storefront
//! - Car detail and similar-cars lookups
//! - Receiving and managing contact/lead submissions

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::catalog::{self, CatalogQuery};
use crate::error::{ApiError, Result};
use crate::model::{
    CarListQuery, ContactCreateRequest, ContactDraft, ContactSubject, ContactUpdateRequest,
};
use crate::store::AppState;

/// Lists cars with filtering, sorting and pagination
///
/// # Query Parameters
///
/// - `brand`, `model`, `transmission` - comma-separated multi-select filters
/// - `yearMin`, `yearMax`, `priceMin`, `priceMax` - inclusive range bounds
/// - `sortBy` - one of `relevance`, `price_asc`, `price_desc`, `year_asc`,
///   `year_desc`, `model_asc`, `model_desc` (default: relevance)
/// - `page`, `pageSize` - positive integers (defaults: 1 and 12)
///
/// # Example Request
///
/// `GET /api/cars?brand=Toyota&sortBy=price_asc&page=1&pageSize=12`
///
/// # Response
///
/// - **200 OK** - `{"success": true, "data": [...], "metadata": {...}}`
/// - **400 Bad Request** - non-positive page/pageSize or negative price bounds
pub async fn list_cars(
    State(state): State<AppState>,
    Query(params): Query<CarListQuery>,
) -> Result<impl IntoResponse> {
    params
        .validate()
        .map_err(|errors| ApiError::validation_with("Invalid parameters", &errors))?;

    let query = CatalogQuery::from_params(params);
    let page = catalog::search(state.cars.get_all(), &query);

    Ok(Json(json!({
        "success": true,
        "data": page.data,
        "metadata": page.metadata,
    })))
}

/// Returns the distinct filter options across the entire catalog
///
/// The aggregation always reflects the full collection, never a filtered
/// subset, so the storefront can offer the complete option space.
pub async fn car_filters(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let options = catalog::filter_options(&state.cars.get_all());

    Ok(Json(json!({
        "success": true,
        "data": options,
    })))
}

/// Returns the full record of a single car
///
/// # Response
///
/// - **200 OK** - car details
/// - **404 Not Found** - unknown identifier
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let car = state
        .cars
        .get_by_id(&id)
        .ok_or_else(|| ApiError::NotFound("Car not found".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "data": car,
    })))
}

/// Returns up to 6 cars similar to the given one
///
/// Similarity is shared body type or brand; ranking is price proximity.
///
/// # Response
///
/// - **200 OK** - `{"success": true, "data": [...]}` with at most 6 entries
/// - **404 Not Found** - unknown identifier
pub async fn similar_cars(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let target = state
        .cars
        .get_by_id(&id)
        .ok_or_else(|| ApiError::NotFound("Car not found".to_string()))?;

    let similar = catalog::similar(state.cars.get_all(), &target);

    Ok(Json(json!({
        "success": true,
        "data": similar,
    })))
}

/// Receives a contact form submission and creates a lead
///
/// The flow mirrors the storefront form:
/// 1. Field validation (name, email, phone, message, captcha, terms)
/// 2. The referenced car must exist
/// 3. Captcha check (mocked; the literal token "invalid" is rejected)
/// 4. Lead stored with a generated protocol number, confirmation emails are
///    simulated via log lines
///
/// # Response
///
/// - **201 Created** - the created lead including its protocol number
/// - **400 Bad Request** - field validation or captcha failure
/// - **404 Not Found** - the referenced car does not exist
pub async fn create_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ContactCreateRequest>,
) -> Result<impl IntoResponse> {
    payload
        .validate()
        .map_err(|errors| ApiError::validation_with("Invalid data", &errors))?;

    if !payload.terms_accepted {
        return Err(ApiError::validation("Privacy terms must be accepted"));
    }

    let car = state
        .cars
        .get_by_id(&payload.car_id)
        .ok_or_else(|| ApiError::NotFound("Car not found".to_string()))?;

    // Mock captcha verification; a real deployment would call the
    // verification API with the token here
    if payload.captcha == "invalid" {
        return Err(ApiError::validation("Invalid captcha"));
    }

    // A financing inquiry implies financing interest regardless of the flag
    let financing = payload.financing || payload.subject == ContactSubject::Financing;

    let contact = state.contacts.add(ContactDraft {
        car_id: payload.car_id,
        car_model: format!("{} {} ({})", car.brand, car.model, car.year),
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        preference: payload.preference,
        best_time: payload.best_time,
        subject: payload.subject,
        message: payload.message,
        financing,
        terms_accepted: payload.terms_accepted,
        newsletter: payload.newsletter,
        ip_address: client_ip(&headers),
    });

    // Simulated email delivery
    tracing::info!(
        email = %contact.email,
        protocol = %contact.protocol,
        "sending confirmation email to requester"
    );
    tracing::info!(lead = %contact.id, "sending notification to sales team");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": contact,
        })),
    ))
}

/// Lists all contact requests, newest first
pub async fn list_contacts(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let mut contacts = state.contacts.get_all();
    contacts.sort_by(|a, b| b.date_created.cmp(&a.date_created));

    let total = contacts.len();

    Ok(Json(json!({
        "success": true,
        "data": contacts,
        "metadata": {
            "total": total,
            "count": total,
        },
    })))
}

/// Returns a single contact request
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let contact = state
        .contacts
        .get_by_id(&id)
        .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "data": contact,
    })))
}

/// Updates a contact request (status, consultant, notes)
///
/// # Response
///
/// - **200 OK** - the updated lead
/// - **404 Not Found** - unknown identifier
/// - **500 Internal Server Error** - the record existed at lookup time but
///   the update failed to persist
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ContactUpdateRequest>,
) -> Result<impl IntoResponse> {
    if state.contacts.get_by_id(&id).is_none() {
        return Err(ApiError::NotFound("Contact not found".to_string()));
    }

    let updated = state
        .contacts
        .update(&id, &payload)
        .ok_or_else(|| ApiError::Internal("Failed to update contact".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "data": updated,
    })))
}

/// Requester address for the lead audit trail
///
/// Honors `x-forwarded-for` (first hop) since the service is expected to sit
/// behind a proxy; falls back to a null address otherwise.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| "0.0.0.0".to_string())
}
