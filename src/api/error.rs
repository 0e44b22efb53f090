use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::services::ServiceError;

/// Status-code contract of the entity endpoints. Error responses carry no body.
impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::AlreadyExists { .. } => StatusCode::CONFLICT,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ServiceError::Store(e) = self {
            log::error!("❌ Store failure: {}", e);
        }
        HttpResponse::new(self.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use actix_web::body::MessageBody;

    #[test]
    fn test_status_codes() {
        let conflict = ServiceError::AlreadyExists { entity: "news", id: "1".into() };
        let missing = ServiceError::NotFound { entity: "news", id: "1".into() };
        let broken = ServiceError::Store(StoreError::Backend("down".into()));

        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(broken.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_has_empty_body() {
        let response = ServiceError::NotFound { entity: "reminder", id: "9".into() }.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().try_into_bytes().unwrap();
        assert!(body.is_empty());
    }
}
