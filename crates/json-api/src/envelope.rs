//! Response envelope
//!
//! Every response body is `{"status": <code>, "message": <payload>}` and the
//! HTTP status mirrors `status`.

use salvo::{
    Scribe,
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation},
    prelude::{Json, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Envelope<T> {
    /// HTTP status code.
    pub status: u16,

    /// Human-readable message or the requested resource.
    pub message: T,
}

impl<T> Envelope<T> {
    pub(crate) fn new(status: StatusCode, message: T) -> Self {
        Self {
            status: status.as_u16(),
            message,
        }
    }

    pub(crate) fn ok(message: T) -> Self {
        Self::new(StatusCode::OK, message)
    }
}

impl Envelope<String> {
    pub(crate) fn text(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, message.into())
    }
}

impl<T> Scribe for Envelope<T>
where
    T: Serialize + Send,
{
    fn render(self, res: &mut Response) {
        res.status_code(
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        );
        res.render(Json(self));
    }
}

impl<T> EndpointOutRegister for Envelope<T> {
    fn register(_components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            StatusCode::OK.as_str(),
            oapi::Response::new("Success envelope"),
        );
    }
}
