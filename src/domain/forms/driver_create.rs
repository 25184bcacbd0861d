//! # 운전자 생성 폼
//!
//! 새로운 운전자 계정 생성을 위한 폼입니다.
//! 사용자 생성 기반 필드(사용자명, 비밀번호, 비밀번호 확인)에
//! 운전자 필드(이름, 성, 이메일, 면허 번호)를 더합니다.
//!
//! ## 검증 규칙
//!
//! ### 사용자명 (`username`)
//! - 필수, 최대 150자, 앞뒤 공백 제거
//! - 허용 문자: 문자, 숫자, `@` `.` `+` `-` `_`
//!
//! ### 비밀번호 (`password1`, `password2`)
//! - 둘 다 필수, 공백을 제거하지 않음
//! - 두 값이 다르면 `password2`에 불일치 에러
//! - 일치하면 강도 검사 결과를 `password2`에 보고 (최소 8자, 숫자만으로 구성 금지)
//!
//! ### 이름 (`first_name`, `last_name`)
//! - 선택, 최대 150자
//!
//! ### 이메일 (`email`)
//! - 선택, 입력 시 이메일 형식 필수
//!
//! ### 면허 번호 (`license_number`)
//! - 필수 (누락/null이면 `This field is required.`)
//! - 제출된 값 그대로 [`clean_license_number`](crate::domain::validators::clean_license_number) 적용
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "username": "jsmith",
//!   "password1": "Str0ngPassw0rd",
//!   "password2": "Str0ngPassw0rd",
//!   "first_name": "John",
//!   "last_name": "Smith",
//!   "email": "john@example.com",
//!   "license_number": "ABC12345"
//! }
//! ```

use std::fmt;
use serde::Deserialize;
use validator::{Validate, ValidationError};
use super::{
    check_license_number, Form, FormErrors, FormMeta, REQUIRED_MESSAGE, USER_CREATION_FIELDS,
    validate_required,
};
use crate::utils::string_utils::{
    deserialize_optional_string, deserialize_trimmed_string, is_valid_string,
};

/// 비밀번호 최소 길이
pub const PASSWORD_MIN_LENGTH: usize = 8;

pub const PASSWORD_MISMATCH_MESSAGE: &str = "The two password fields didn't match.";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str =
    "This password is too short. It must contain at least 8 characters.";
pub const PASSWORD_ENTIRELY_NUMERIC_MESSAGE: &str = "This password is entirely numeric.";
pub const INVALID_USERNAME_MESSAGE: &str = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";

/// 새로운 운전자 계정 생성을 위한 폼
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DriverCreateForm {
    /// 로그인 사용자명
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(
        length(max = 150, message = "Ensure this value has at most 150 characters."),
        custom(function = "validate_username")
    )]
    pub username: String,

    /// 비밀번호
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub password1: String,

    /// 비밀번호 확인
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub password2: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    pub first_name: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    pub last_name: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(required(message = "This field is required."))]
    pub license_number: Option<String>,
}

/// 검증을 통과한 운전자 생성 데이터
#[derive(Clone, PartialEq, Eq)]
pub struct CleanedDriverCreate {
    pub username: String,
    /// 해싱 전 평문 비밀번호
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// 입력하지 않았으면 빈 문자열
    pub email: String,
    pub license_number: String,
}

impl fmt::Debug for CleanedDriverCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanedDriverCreate")
            .field("username", &self.username)
            .field("password", &"********")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("license_number", &self.license_number)
            .finish()
    }
}

impl Form for DriverCreateForm {
    type Cleaned = CleanedDriverCreate;
    type Context = ();

    const META: FormMeta = FormMeta {
        model: "driver",
        base_fields: USER_CREATION_FIELDS,
        fields: &["username", "first_name", "last_name", "email", "license_number"],
        exclude: &[],
    };

    fn clean_form(&self, _context: &(), errors: &mut FormErrors) {
        check_license_number(self.license_number.as_deref(), errors);
        check_passwords(&self.password1, &self.password2, errors);
    }

    fn into_cleaned(self, _context: &()) -> CleanedDriverCreate {
        CleanedDriverCreate {
            username: self.username,
            password: self.password1,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email.unwrap_or_default(),
            license_number: self.license_number.unwrap_or_default(),
        }
    }
}

/// 사용자명 필수 입력 및 허용 문자 검증
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::new("required").with_message(REQUIRED_MESSAGE.into()));
    }

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(ValidationError::new("invalid").with_message(INVALID_USERNAME_MESSAGE.into()));
    }

    Ok(())
}

/// 비밀번호 확인 및 강도 검사
///
/// 한쪽이라도 비어 있으면 필수 입력 에러가 이미 보고된 상태이므로 건너뜁니다.
fn check_passwords(password1: &str, password2: &str, errors: &mut FormErrors) {
    if !is_valid_string(password1) || !is_valid_string(password2) {
        return;
    }

    if password1 != password2 {
        errors.add("password2", "password_mismatch", PASSWORD_MISMATCH_MESSAGE);
        return;
    }

    if password2.chars().count() < PASSWORD_MIN_LENGTH {
        errors.add("password2", "password_too_short", PASSWORD_TOO_SHORT_MESSAGE);
    }

    if password2.chars().all(char::is_numeric) {
        errors.add("password2", "password_entirely_numeric", PASSWORD_ENTIRELY_NUMERIC_MESSAGE);
    }
}
