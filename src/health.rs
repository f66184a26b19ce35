use actix_web::HttpResponse;

/// Liveness check. Does not touch the store.
pub async fn health() -> HttpResponse {
  HttpResponse::Ok()
    .content_type("text/plain; charset=utf-8")
    .body("Healthy")
}
