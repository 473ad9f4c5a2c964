//! Application entry point and server initialization
//!
//! This module contains the main function that:
//! - Loads environment configuration
//! - Seeds the in-memory catalog
//! - Starts the HTTP server with graceful shutdown support

use std::env;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

// Module declarations
mod catalog;
mod error;
mod handler;
mod model;
mod route;
mod seed;
mod store;

use route::create_app;
use store::{AppState, CarStore, ContactStore};

/// Application entry point
///
/// This asynchronous main function:
/// 1. Loads environment variables from .env file
/// 2. Reads the server port configuration
/// 3. Seeds the in-memory car catalog
/// 4. Creates the application state and router
/// 5. Starts the HTTP server with graceful shutdown handling
///
/// # Environment Variables
///
/// - `PORT` - Server port number (default: 8080)
#[tokio::main]
async fn main() {
    // Load environment variables from .env file if it exists
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter("dealership=debug,tower_http=debug")
        .init();

    // Read and parse the server port from environment
    let port_str = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let port: u16 = port_str.parse().unwrap_or(8080);

    // Populate the catalog once; it is read-only from here on
    let cars = CarStore::with_records(seed::seed_cars());
    let catalog_size = cars.len();

    // Create application state with thread-safe store references
    let state = AppState {
        cars: Arc::new(cars),
        contacts: Arc::new(ContactStore::new()),
    };

    // Create the Axum router with all routes configured
    let app = create_app(state).layer(TraceLayer::new_for_http());

    // Bind to all network interfaces on the specified port
    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await.unwrap();

    // Print startup information
    println!("🚀 Server running at http://localhost:{}", port);
    println!("🚗 Catalog seeded with {} vehicles", catalog_size);

    // Start the server with graceful shutdown support
    // The server will continue running until it receives SIGTERM or SIGINT
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

/// Handles graceful shutdown signals
///
/// This function listens for shutdown signals and returns when one is received:
/// - SIGINT (Ctrl+C) - Interrupt signal from terminal
/// - SIGTERM - Termination signal (common in Docker/Kubernetes)
///
/// When a signal is received the function returns, triggering server
/// shutdown; open connections are allowed to complete and the application
/// exits cleanly.
async fn shutdown_signal() {
    // Handle Ctrl+C (SIGINT)
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    // Handle SIGTERM on Unix systems (Linux, macOS)
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    // On non-Unix systems (Windows), only handle Ctrl+C
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // Wait for either signal to be received
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("\n🛑 Shutdown signal received, stopping server.");
}
