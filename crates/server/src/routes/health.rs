//! Liveness probe.

/// GET /healthz - Always `ok` while the process is serving.
pub async fn healthz() -> &'static str {
    "ok"
}
