//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;
use tracing::error;

use crate::errors::ApiError;

/// Helpers for mapping depot extraction failures to API errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!(
                "depot is missing {} state",
                std::any::type_name::<T>()
            );

            ApiError::Internal
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn test_missing_state_is_internal_error() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<String>();

        assert!(
            matches!(&result, Err(error) if error.status_code() == StatusCode::INTERNAL_SERVER_ERROR),
            "expected internal error, got {result:?}"
        );
    }

    #[test]
    fn test_present_state_is_returned() {
        let mut depot = Depot::new();

        depot.inject(42_u32);

        assert!(matches!(depot.obtain_or_500::<u32>(), Ok(&42)));
    }
}
