//! # 차량 폼
//!
//! 차량 생성/수정과 운전자 배정을 위한 폼입니다.
//! 운전자 목록은 모든 사용자 계정 중에서 고르는 다중 선택이며, 비워 둘 수 있습니다.
//!
//! ## 선택 후보
//!
//! 후보 목록은 호스트 애플리케이션이 조회해서 [`CarFormContext`]로 넘깁니다.
//!
//! ```rust,ignore
//! let context = CarFormContext::new(&all_drivers, &all_manufacturers);
//! let cleaned = form.full_clean(&context)?;
//! ```
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "model": "Camry",
//!   "manufacturer": "7f1c2a1e-0a54-4a8e-9d8f-3e5b8c6f1d20",
//!   "drivers": [
//!     "0b8e1f7c-2c55-4c1b-8a5e-6d2f9e4b3a11",
//!     "c3d4e5f6-1a2b-4c3d-8e9f-0a1b2c3d4e5f"
//!   ]
//! }
//! ```

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;
use super::{validate_required, Form, FormErrors, FormMeta, ModelChoices};
use crate::domain::entities::{Car, Driver, Manufacturer};
use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

pub const INVALID_MANUFACTURER_MESSAGE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

/// 차량 폼
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CarForm {
    /// 차종 이름
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(
        length(max = 255, message = "Ensure this value has at most 255 characters."),
        custom(function = "validate_required")
    )]
    pub model: String,

    /// 제조사 ID
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "This field is required."))]
    pub manufacturer: Option<String>,

    /// 선택한 운전자 ID 목록
    #[serde(default)]
    pub drivers: Vec<String>,
}

/// 선택 가능한 운전자/제조사 후보
#[derive(Debug, Clone, Default)]
pub struct CarFormContext {
    pub drivers: ModelChoices,
    pub manufacturers: ModelChoices,
}

impl CarFormContext {
    /// 모든 사용자 계정과 제조사로 후보 목록을 만듭니다
    pub fn new(drivers: &[Driver], manufacturers: &[Manufacturer]) -> Self {
        Self {
            drivers: ModelChoices::from_drivers(drivers),
            manufacturers: ModelChoices::from_manufacturers(manufacturers),
        }
    }
}

/// 검증을 통과한 차량 데이터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedCar {
    pub model: String,
    pub manufacturer_id: Uuid,
    /// 중복 제거, 선택 순서 유지
    pub driver_ids: Vec<Uuid>,
}

impl CarForm {
    /// 기존 차량 정보로 채운 폼
    pub fn from_instance(car: &Car) -> Self {
        Self {
            model: car.model.clone(),
            manufacturer: Some(car.manufacturer_id.to_string()),
            drivers: car.driver_ids.iter().map(Uuid::to_string).collect(),
        }
    }
}

impl Form for CarForm {
    type Cleaned = CleanedCar;
    type Context = CarFormContext;

    const META: FormMeta = FormMeta {
        model: "car",
        base_fields: &[],
        fields: &["model", "manufacturer", "drivers"],
        exclude: &[],
    };

    fn clean_form(&self, context: &CarFormContext, errors: &mut FormErrors) {
        if let Some(manufacturer) = &self.manufacturer {
            let is_choice = Uuid::parse_str(manufacturer)
                .map(|id| context.manufacturers.contains(&id))
                .unwrap_or(false);

            if !is_choice {
                errors.add("manufacturer", "invalid_choice", INVALID_MANUFACTURER_MESSAGE);
            }
        }

        // 첫 번째 잘못된 값만 보고
        for value in &self.drivers {
            match Uuid::parse_str(value.trim()) {
                Err(_) => {
                    errors.add(
                        "drivers",
                        "invalid_pk_value",
                        format!("“{}” is not a valid value.", value),
                    );
                    break;
                }
                Ok(id) if !context.drivers.contains(&id) => {
                    errors.add(
                        "drivers",
                        "invalid_choice",
                        format!(
                            "Select a valid choice. {} is not one of the available choices.",
                            value
                        ),
                    );
                    break;
                }
                Ok(_) => {}
            }
        }
    }

    fn into_cleaned(self, _context: &CarFormContext) -> CleanedCar {
        let mut driver_ids: Vec<Uuid> = Vec::with_capacity(self.drivers.len());
        for id in self
            .drivers
            .iter()
            .filter_map(|value| Uuid::parse_str(value.trim()).ok())
        {
            if !driver_ids.contains(&id) {
                driver_ids.push(id);
            }
        }

        CleanedCar {
            model: self.model,
            manufacturer_id: self
                .manufacturer
                .as_deref()
                .and_then(|value| Uuid::parse_str(value).ok())
                .unwrap_or_default(),
            driver_ids,
        }
    }
}
