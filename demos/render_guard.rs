//! Example: Guarding a Render Pass
//!
//! Wires an `ErrorBoundary` to an `ErrorLoggingService` and renders a page
//! whose widget fails. Run with `RUST_LOG=error_relay=debug` to also see the
//! boundary's capture event.

use std::sync::Arc;

use error_relay::config::ReportConfig;
use error_relay::prelude::*;
use error_relay::render::ErrorTrigger;
use error_relay::SystemAmbient;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let ambient = Arc::new(SystemAmbient::new());
    ambient.navigate("/dashboard");

    let service = Arc::new(
        ErrorLoggingService::builder()
            .config(ReportConfig::from_env())
            .shared_ambient(ambient.clone())
            .build(),
    );

    // 1. A boundary around a widget that fails on its first render
    let page = ErrorBoundary::new(ErrorTrigger::new(true))
        .reporting_to(Arc::clone(&service))
        .reset_error(|| println!("retry requested"));

    match render(&page) {
        Ok(node) => println!("rendered fallback:\n{}", node.text_content()),
        Err(failure) => eprintln!("uncontained failure: {}", failure),
    }

    // 2. Failures outside rendering go through the handler
    let handler = ErrorHandler::new(service);
    handler.handle_user_action_error("email is required", "submit_signup", None);
    handler.log_info("signup form reset", Some(metadata! { "fields" => 4 }));
}
