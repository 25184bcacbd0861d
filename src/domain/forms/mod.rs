//! # 폼 처리 파이프라인
//!
//! 운전자/차량 폼이 공유하는 검증 파이프라인과 에러 수집 타입을 정의합니다.
//! 각 폼은 제출된 키-값 데이터를 `serde`로 역직렬화한 구조체이며,
//! 다음 순서로 정리(clean)됩니다.
//!
//! 1. **필드 검증**: `validator` 크레이트의 derive 규칙 (필수값, 길이, 이메일 등)
//! 2. **폼 수준 훅**: [`Form::clean_form`]에서 면허 번호, 비밀번호 확인 등 실행
//! 3. **결과 수집**: 모든 실패는 [`FormErrors`]에 필드별로 모임
//! 4. **정리된 값 생성**: 에러가 없을 때만 [`Form::into_cleaned`] 호출
//!
//! ## 필드 구성
//!
//! 각 폼은 [`FormMeta`]로 자신이 다루는 필드를 선언합니다. 기반 폼에서 물려받은
//! 필드라도 `exclude` 목록에 있으면 초기값 채우기와 수정 적용에서 모두 빠집니다.
//!
//! ```rust,ignore
//! use crate::domain::forms::{Form, DriverLicenseUpdateForm};
//!
//! let form: DriverLicenseUpdateForm = serde_json::from_value(payload)?;
//! match form.full_clean(&()) {
//!     Ok(cleaned) => cleaned.apply_to(&mut driver),
//!     Err(errors) => return Err(errors.into()),
//! }
//! ```

pub mod car_form;
pub mod driver_create;
pub mod driver_license_update;

pub use car_form::{CarForm, CarFormContext, CleanedCar};
pub use driver_create::{CleanedDriverCreate, DriverCreateForm};
pub use driver_license_update::{CleanedDriverLicenseUpdate, DriverLicenseUpdateForm};

use std::collections::BTreeMap;
use std::fmt;
use serde::Serialize;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};
use crate::domain::entities::{Driver, Manufacturer};
use crate::domain::validators::clean_license_number;
use crate::utils::string_utils::is_valid_string;

/// 필수 입력값 누락 메시지
pub const REQUIRED_MESSAGE: &str = "This field is required.";

pub const LICENSE_NUMBER_FIELD: &str = "license_number";

/// 사용자 생성 기반 폼이 선언하는 필드
pub const USER_CREATION_FIELDS: &[&str] = &["username", "password1", "password2"];

/// 사용자 수정 기반 폼이 선언하는 필드
pub const USER_CHANGE_FIELDS: &[&str] = &["password"];

/// 단일 필드 에러
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// 기계 판독용 에러 코드 (예: `invalid_format`, `required`)
    pub code: String,
    /// 사용자에게 표시할 메시지
    pub message: String,
}

/// 필드 이름별로 모은 폼 에러
///
/// 필드 이름 순으로 정렬되어 응답이 항상 같은 순서를 가집니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<FieldError>>);

impl FormErrors {
    /// 필드에 에러 하나를 추가합니다
    pub fn add(&mut self, field: &str, code: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(FieldError {
            code: code.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 에러가 있는 필드인지 확인
    pub fn has_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// 특정 필드의 에러 목록
    pub fn get(&self, field: &str) -> &[FieldError] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// 특정 필드의 메시지 목록
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.get(field).iter().map(|e| e.message.as_str()).collect()
    }

    /// 에러가 있는 필드 이름들
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `{필드: [메시지, ...]}` 형태의 응답용 맵
    pub fn messages_by_field(&self) -> BTreeMap<&str, Vec<&str>> {
        self.0
            .iter()
            .map(|(field, errors)| {
                (
                    field.as_str(),
                    errors.iter().map(|e| e.message.as_str()).collect(),
                )
            })
            .collect()
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut form_errors = FormErrors::default();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                form_errors.add(&field.to_string(), &error.code, message);
            }
        }

        form_errors
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|(field, errors)| {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                format!("{}: {}", field, messages.join(" "))
            })
            .collect();

        write!(f, "{}", rendered.join("; "))
    }
}

/// 폼이 다루는 필드 구성
///
/// 유효 필드 = 기반 폼 선언 필드 + 모델 필드 - 제외 필드
#[derive(Debug, Clone, Copy)]
pub struct FormMeta {
    /// 대상 모델 이름
    pub model: &'static str,
    /// 기반 폼에서 물려받은 선언 필드
    pub base_fields: &'static [&'static str],
    /// 모델에서 가져오는 필드
    pub fields: &'static [&'static str],
    /// 명시적으로 제외하는 필드
    pub exclude: &'static [&'static str],
}

impl FormMeta {
    /// 실제로 폼에 포함되는 필드 목록 (선언 순서 유지, 중복 제거)
    pub fn effective_fields(&self) -> Vec<&'static str> {
        let mut effective: Vec<&'static str> = Vec::new();

        for field in self.base_fields.iter().chain(self.fields.iter()) {
            if !self.exclude.contains(field) && !effective.contains(field) {
                effective.push(field);
            }
        }

        effective
    }

    pub fn includes(&self, field: &str) -> bool {
        self.effective_fields().contains(&field)
    }

    /// 기존 인스턴스로부터 유효 필드의 초기값을 채웁니다
    ///
    /// 인스턴스가 값을 제공하지 않는 필드(비밀번호 확인란 등)는 건너뜁니다.
    pub fn initial<M: ModelInstance>(&self, instance: &M) -> serde_json::Map<String, serde_json::Value> {
        self.effective_fields()
            .into_iter()
            .filter_map(|field| {
                instance
                    .field_value(field)
                    .map(|value| (field.to_string(), value))
            })
            .collect()
    }
}

/// 폼 초기값을 제공할 수 있는 모델
pub trait ModelInstance {
    /// 필드 이름에 해당하는 현재 값
    fn field_value(&self, field: &str) -> Option<serde_json::Value>;
}

/// 폼 정리 파이프라인
///
/// `Context`는 폼 정리에 필요한 외부 데이터입니다.
/// 운전자 폼은 `()`, 차량 폼은 선택 가능한 운전자/제조사 목록을 받습니다.
pub trait Form: Validate + Sized {
    type Cleaned;
    type Context: ?Sized;

    const META: FormMeta;

    /// 필드 검증 이후 실행되는 폼 수준 훅
    fn clean_form(&self, _context: &Self::Context, _errors: &mut FormErrors) {}

    /// 검증을 통과한 폼을 정리된 값으로 변환
    fn into_cleaned(self, context: &Self::Context) -> Self::Cleaned;

    /// 전체 정리 파이프라인 실행
    fn full_clean(self, context: &Self::Context) -> Result<Self::Cleaned, FormErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FormErrors::default(),
            Err(validation_errors) => FormErrors::from(validation_errors),
        };

        self.clean_form(context, &mut errors);

        if errors.is_empty() {
            Ok(self.into_cleaned(context))
        } else {
            Err(errors)
        }
    }
}

/// 모델 선택 필드의 후보 목록
///
/// 키는 후보 레코드 ID, 값은 표시용 라벨입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelChoices(BTreeMap<Uuid, String>);

impl ModelChoices {
    /// 모든 사용자 계정을 운전자 후보로 만듭니다
    pub fn from_drivers<'a>(drivers: impl IntoIterator<Item = &'a Driver>) -> Self {
        Self(
            drivers
                .into_iter()
                .map(|driver| (driver.id, driver.username.clone()))
                .collect(),
        )
    }

    pub fn from_manufacturers<'a>(manufacturers: impl IntoIterator<Item = &'a Manufacturer>) -> Self {
        Self(
            manufacturers
                .into_iter()
                .map(|manufacturer| (manufacturer.id, manufacturer.name.clone()))
                .collect(),
        )
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.0.contains_key(id)
    }

    pub fn label(&self, id: &Uuid) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Uuid, &str)> {
        self.0.iter().map(|(id, label)| (id, label.as_str()))
    }
}

/// 공백만 있는 값도 누락으로 처리하는 필수 입력 검증
pub(crate) fn validate_required(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("required").with_message(REQUIRED_MESSAGE.into()));
    }
    Ok(())
}

/// 운전자 폼들이 공유하는 면허 번호 훅
///
/// 값이 없으면 필드 검증의 `required` 규칙이 이미 보고했으므로 건너뜁니다.
pub(crate) fn check_license_number(license_number: Option<&str>, errors: &mut FormErrors) {
    if let Some(license_number) = license_number {
        if let Err(error) = clean_license_number(license_number) {
            log::debug!("license_number rejected: {}", error);
            errors.add(LICENSE_NUMBER_FIELD, error.code(), error.message());
        }
    }
}
