use tracing::info;

use vis_portal_backend::{account, admin, attendance, config, highlight, router, schedule, student};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    // force the stores to load before accepting traffic
    info!(
        "loaded {} students, {} admins, {} attendance records, {} highlights, {} events",
        student::INSTANCE.count(),
        admin::INSTANCE.all().len(),
        attendance::INSTANCE.records.read().len(),
        highlight::INSTANCE.all().len(),
        schedule::INSTANCE.all().len(),
    );
    once_cell::sync::Lazy::force(&account::INSTANCE);

    let app = router();

    let addr: std::net::SocketAddr = format!(
        "{}:{}",
        config::INSTANCE.server.address,
        config::INSTANCE.server.port
    )
    .parse()
    .unwrap();

    info!("listening on {addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
