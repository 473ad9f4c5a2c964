//! Route definitions for the dealership catalog API
//!
//! This module configures all HTTP routes and maps them to their respective
//! handlers. It creates the Axum router with the application state.

use axum::routing::get;
use axum::Router;

use crate::handler::{
    car_filters, create_contact, get_car, get_contact, list_cars, list_contacts, similar_cars,
    update_contact,
};
use crate::store::AppState;

/// Creates and configures the Axum application router with all routes
///
/// # Route Definitions
///
/// - `GET  /api/cars` - lists cars with filtering, sorting and pagination
/// - `GET  /api/cars/filters` - distinct filter options across the catalog
/// - `GET  /api/cars/{id}` - car details
/// - `GET  /api/cars/{id}/similar` - up to 6 similar cars
/// - `POST /api/contacts` - submits a contact form (creates a lead)
/// - `GET  /api/contacts` - lists leads, newest first
/// - `GET  /api/contacts/{id}` - lead details
/// - `PUT  /api/contacts/{id}` - updates a lead (status/consultant/notes)
///
/// # Arguments
///
/// * `state` - Application state carrying the shared car and contact stores
///
/// # Returns
///
/// Configured Axum Router ready to handle requests
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/cars", get(list_cars))
        .route("/cars/filters", get(car_filters))
        .route("/cars/{id}", get(get_car))
        .route("/cars/{id}/similar", get(similar_cars))
        .route("/contacts", get(list_contacts).post(create_contact))
        .route("/contacts/{id}", get(get_contact).put(update_contact));

    Router::new()
        // Mount the catalog and lead endpoints under /api
        .nest("/api", api_routes)
        // Inject the application state into all handlers
        .with_state(state)
}
