use axum::http::StatusCode;

/// Error taxonomy for the domain services.
///
/// Handlers map these onto HTTP status codes; validation failures are the
/// only variant whose message is meant for the end user.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_422() {
        let err = ServiceError::Validation("Location is required.".into());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Location is required.");
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(ServiceError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }
}
