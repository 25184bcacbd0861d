//! # Application Error Handling System
//!
//! 택시 서비스 폼 계층의 통합 에러 처리 시스템입니다.
//! 폼 검증 실패와 내부 오류를 하나의 타입으로 묶고,
//! `actix_web::ResponseError`를 구현하여 호스트 애플리케이션의 핸들러가
//! 그대로 반환할 수 있도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 폼 필드 검증 실패 |
//! | `InternalError` | 500 Internal Server Error | 비밀번호 해싱 실패 등 |
//!
//! ## 검증 실패 응답 형식
//!
//! ```json
//! {
//!   "error": "validation_error",
//!   "message": "license_number: The license number must be exactly 8 characters long.",
//!   "details": {
//!     "license_number": ["The license number must be exactly 8 characters long."]
//!   }
//! }
//! ```
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use crate::core::errors::AppError;
//!
//! async fn create_driver_handler(
//!     payload: web::Json<DriverCreateForm>,
//! ) -> Result<HttpResponse, AppError> {
//!     let driver = DriverService::new().create_driver(payload.into_inner())?;
//!     // 저장은 호스트 애플리케이션의 몫
//!     Ok(HttpResponse::Created().json(driver))
//! }
//! ```

use thiserror::Error;
use crate::domain::forms::FormErrors;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 폼 검증 에러 (400 Bad Request)
    ///
    /// 필드별 에러 목록을 그대로 담아 클라이언트가 각 입력란 옆에
    /// 메시지를 표시할 수 있게 합니다. 사용자가 수정 후 재제출하면 복구됩니다.
    #[error("Validation error: {0}")]
    ValidationError(FormErrors),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// # 발생 시나리오
    /// - bcrypt 해싱 실패
    /// - 잘못된 bcrypt cost 설정
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<FormErrors> for AppError {
    fn from(errors: FormErrors) -> Self {
        AppError::ValidationError(errors)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 내부 메시지를 노출하지 않고 로그에만 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => serde_json::json!({
                "error": "validation_error",
                "message": errors.to_string(),
                "details": errors.messages_by_field(),
            }),
            AppError::InternalError(msg) => {
                log::error!("Internal error: {}", msg);
                serde_json::json!({
                    "error": "internal_error",
                    "message": "Internal server error",
                })
            }
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
