use axum::Router;
use axum::routing::get;
use lib::service::CommonService;

use crate::handlers::{emotion_detector, render_index_page};


pub fn create_router(service: CommonService) -> Router {
    Router::new()
        .route("/", get(render_index_page))
        .route("/emotionDetector", get(emotion_detector))
        .with_state(service)
}
