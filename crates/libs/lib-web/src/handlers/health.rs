/// Liveness probe: `GET /health` → `OK`.
pub async fn health() -> &'static str {
    "OK"
}
