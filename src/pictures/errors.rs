use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    Network,
    Timeout,
    Auth,
    Quota,
    ContentFiltered,
    Unknown,
}

impl GatewayErrorKind {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Network => "GatewayNetwork",
            Self::Timeout => "GatewayTimeout",
            Self::Auth => "GatewayAuth",
            Self::Quota => "GatewayQuota",
            Self::ContentFiltered => "GatewayContentFiltered",
            Self::Unknown => "GatewayUnknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PictureApiError {
    Validation(String),
    ImageConstraint(String),
    ParameterInvalid(String),
    ResourceNotFound(String),
    Gateway(GatewayErrorKind, String),
}

impl PictureApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::ImageConstraint(_) => "ImageConstraintViolation",
            Self::ParameterInvalid(_) => "ParameterInvalid",
            Self::ResourceNotFound(_) => "ResourceNotFound",
            Self::Gateway(kind, _) => kind.value(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::ImageConstraint(message)
            | Self::ParameterInvalid(message)
            | Self::ResourceNotFound(message)
            | Self::Gateway(_, message) => message,
        }
    }

    // Only transient gateway failures justify a whole-run retry; validation
    // and resolution errors must never be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Gateway(GatewayErrorKind::Network, _)
                | Self::Gateway(GatewayErrorKind::Timeout, _)
        )
    }

    pub fn value(&self) -> ApiError {
        let code = match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::ImageConstraint(_) => StatusCode::BAD_REQUEST,
            Self::ParameterInvalid(_) => StatusCode::BAD_REQUEST,
            Self::ResourceNotFound(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Gateway(kind, _) => match kind {
                GatewayErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
                GatewayErrorKind::Quota => StatusCode::TOO_MANY_REQUESTS,
                GatewayErrorKind::ContentFiltered => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::BAD_GATEWAY,
            },
        };

        ApiError {
            code,
            message: [self.kind(), ": ", self.message()].concat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transient_gateway_errors_are_retryable() {
        let retryable = [
            PictureApiError::Gateway(GatewayErrorKind::Network, "connect refused".to_string()),
            PictureApiError::Gateway(GatewayErrorKind::Timeout, "deadline exceeded".to_string()),
        ];
        let not_retryable = [
            PictureApiError::Validation("missing clothes".to_string()),
            PictureApiError::ImageConstraint("too large".to_string()),
            PictureApiError::ParameterInvalid("unknown style".to_string()),
            PictureApiError::ResourceNotFound("file gone".to_string()),
            PictureApiError::Gateway(GatewayErrorKind::Auth, "bad key".to_string()),
            PictureApiError::Gateway(GatewayErrorKind::Quota, "quota".to_string()),
            PictureApiError::Gateway(GatewayErrorKind::ContentFiltered, "filtered".to_string()),
        ];

        assert!(retryable.iter().all(|e| e.is_retryable()));
        assert!(not_retryable.iter().all(|e| !e.is_retryable()));
    }

    #[test]
    fn classification_names_are_distinct() {
        let validation = PictureApiError::Validation("x".to_string());
        let parameter = PictureApiError::ParameterInvalid("x".to_string());
        let resource = PictureApiError::ResourceNotFound("x".to_string());

        assert_eq!(validation.kind(), "ValidationError");
        assert_eq!(parameter.kind(), "ParameterInvalid");
        assert_eq!(resource.kind(), "ResourceNotFound");
        assert_eq!(
            PictureApiError::Gateway(GatewayErrorKind::Timeout, "x".to_string()).kind(),
            "GatewayTimeout"
        );
    }
}
