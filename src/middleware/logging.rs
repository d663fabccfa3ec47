use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Request logger. Prints a coloured timestamp/method/path one-liner for
/// every request and adds an `X-Response-Time-Us` header with the total
/// handler wall time in microseconds. Never affects control flow.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let start = Instant::now();
    let mut response = next.run(req).await;
    let us = start.elapsed().as_micros();

    // ── Inject response header ──────────────────────────────────
    if let Ok(val) = us.to_string().parse() {
        response.headers_mut().insert("X-Response-Time-Us", val);
    }

    // ── Console log ─────────────────────────────────────────────
    let status = response.status().as_u16();
    let colour = match status {
        200..=299 => "\x1b[32m", // green
        400..=499 => "\x1b[33m", // yellow
        _ => "\x1b[31m",        // red
    };
    let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
    println!("  {ts}  {colour}{status}\x1b[0m  {method:<6} {path:<32} {us:>7}μs");

    response
}
