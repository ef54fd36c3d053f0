//! Healthcheck Handler

use salvo::prelude::*;

use crate::envelope::Envelope;

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Envelope<String> {
    Envelope::text(StatusCode::OK, "healthy")
}
