//! Liveness and readiness endpoints for load balancers and orchestrators.

/// `GET /healthz`: the process is up and serving.
pub async fn healthz() -> &'static str {
    "ok"
}

/// `GET /readyz`: the service can take traffic. Dependency probes (database
/// ping) would hang the check behind a slow pool, so readiness stays a
/// process-level signal.
pub async fn readyz() -> &'static str {
    "ok"
}
