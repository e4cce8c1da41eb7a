use std::sync::Arc;

use contact_service::{config, mailer::SmtpMailer, router, service::ContactService};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt().init();

    // Load config
    let cfg = config::load_config().expect("failed to load configuration from environment");
    tracing::info!("Successfully loaded contact service config");

    // Setup service
    let mailer = SmtpMailer::new(&cfg);
    let service = ContactService::new(mailer, cfg.sender.clone());
    let service_ptr = Arc::new(service);

    // Setup router
    let app = router(service_ptr);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.http_port))
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().unwrap();

    tracing::info!("Contact service starting, listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
