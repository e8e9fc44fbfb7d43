mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::server::handlers::{geocoding, places, routes};

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/places", get(places::index).post(places::create))
        .route(
            "/places/:id",
            get(places::find).put(places::replace).delete(places::remove),
        )
        .route("/places/:id/placemark", get(geocoding::locate))
        .route("/places/:id/route", get(routes::to_place))
        .route("/geocoding", get(geocoding::resolve))
        .route("/geocoding/reverse", get(geocoding::reverse))
        .route("/routes", post(routes::create))
        .layer(Extension(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
