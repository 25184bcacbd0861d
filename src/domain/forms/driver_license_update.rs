//! # 운전자 면허 정보 수정 폼
//!
//! 기존 운전자의 이름, 이메일, 면허 번호를 수정하는 폼입니다.
//! 사용자 수정 기반 폼이 선언하는 `password` 필드는 제외 목록으로 빠지므로,
//! 비밀번호 해시는 초기값으로 노출되지도, 수정되지도 않습니다.
//!
//! 면허 번호 규칙은 생성 폼과 같은 함수를 사용합니다.

use serde::Deserialize;
use validator::Validate;
use super::{check_license_number, Form, FormErrors, FormMeta, USER_CHANGE_FIELDS};
use crate::domain::entities::Driver;
use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

/// 운전자 면허 정보 수정 폼
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DriverLicenseUpdateForm {
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

/// 검증을 통과한 수정 데이터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedDriverLicenseUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub license_number: String,
}

impl DriverLicenseUpdateForm {
    /// 기존 운전자 정보로 채운 폼
    ///
    /// 수정 화면의 초기값으로 사용합니다.
    pub fn from_instance(driver: &Driver) -> Self {
        Self {
            first_name: driver.first_name.clone(),
            last_name: driver.last_name.clone(),
            email: Some(driver.email.clone()).filter(|email| !email.is_empty()),
            license_number: Some(driver.license_number.clone()),
        }
    }

    /// 유효 필드만 담은 초기값 맵
    pub fn initial(driver: &Driver) -> serde_json::Map<String, serde_json::Value> {
        Self::META.initial(driver)
    }
}

impl Form for DriverLicenseUpdateForm {
    type Cleaned = CleanedDriverLicenseUpdate;
    type Context = ();

    const META: FormMeta = FormMeta {
        model: "driver",
        base_fields: USER_CHANGE_FIELDS,
        fields: &["first_name", "last_name", "email", "license_number"],
        exclude: &["password"],
    };

    fn clean_form(&self, _context: &(), errors: &mut FormErrors) {
        check_license_number(self.license_number.as_deref(), errors);
    }

    fn into_cleaned(self, _context: &()) -> CleanedDriverLicenseUpdate {
        CleanedDriverLicenseUpdate {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email.unwrap_or_default(),
            license_number: self.license_number.unwrap_or_default(),
        }
    }
}

impl CleanedDriverLicenseUpdate {
    /// 유효 필드만 운전자에게 반영합니다
    ///
    /// 사용자명과 비밀번호 해시는 폼 필드가 아니므로 그대로 남습니다.
    pub fn apply_to(mut self, driver: &mut Driver) {
        let meta = DriverLicenseUpdateForm::META;

        for field in meta.effective_fields() {
            match field {
                "first_name" => driver.first_name = std::mem::take(&mut self.first_name),
                "last_name" => driver.last_name = std::mem::take(&mut self.last_name),
                "email" => driver.email = std::mem::take(&mut self.email),
                "license_number" => driver.license_number = std::mem::take(&mut self.license_number),
                other => log::warn!("{} field '{}' has no update mapping", meta.model, other),
            }
        }

        driver.touch();
    }
}

/// 수정 폼이 실제로 노출하는 필드인지 확인
pub fn exposes_field(field: &str) -> bool {
    DriverLicenseUpdateForm::META.includes(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forms::REQUIRED_MESSAGE;
    use crate::domain::validators::license_number::{PREFIX_MESSAGE, SUFFIX_MESSAGE};
    use serde_json::json;

    fn existing_driver() -> Driver {
        Driver::new_local(
            "jsmith".to_string(),
            "$2b$04$existinghash".to_string(),
            "John".to_string(),
            "Smith".to_string(),
            "john@example.com".to_string(),
            "ABC12345".to_string(),
        )
    }

    #[test]
    fn test_password_field_is_excluded() {
        let fields = DriverLicenseUpdateForm::META.effective_fields();

        assert_eq!(fields, vec!["first_name", "last_name", "email", "license_number"]);
        assert!(!exposes_field("password"));
        assert!(!exposes_field("username"));
    }

    #[test]
    fn test_initial_never_contains_password_hash() {
        let driver = existing_driver();
        let initial = DriverLicenseUpdateForm::initial(&driver);

        assert_eq!(initial["license_number"], "ABC12345");
        assert!(!initial.contains_key("password"));
        assert!(!initial.values().any(|v| v == "$2b$04$existinghash"));
        assert_eq!(initial["email"], "john@example.com");
    }

    #[test]
    fn test_prefilled_form_is_valid() {
        let driver = existing_driver();
        let cleaned = DriverLicenseUpdateForm::from_instance(&driver)
            .full_clean(&())
            .unwrap();

        assert_eq!(cleaned.license_number, driver.license_number);
        assert_eq!(cleaned.email, driver.email);
    }

    #[test]
    fn test_license_number_rules_apply_to_update() {
        let form: DriverLicenseUpdateForm =
            serde_json::from_value(json!({"license_number": "abc12345"})).unwrap();
        let errors = form.full_clean(&()).unwrap_err();
        assert_eq!(errors.messages("license_number"), vec![PREFIX_MESSAGE]);

        let form: DriverLicenseUpdateForm =
            serde_json::from_value(json!({"license_number": "ABC1234X"})).unwrap();
        let errors = form.full_clean(&()).unwrap_err();
        assert_eq!(errors.messages("license_number"), vec![SUFFIX_MESSAGE]);

        let form: DriverLicenseUpdateForm = serde_json::from_value(json!({})).unwrap();
        let errors = form.full_clean(&()).unwrap_err();
        assert_eq!(errors.messages("license_number"), vec![REQUIRED_MESSAGE]);
    }

    #[test]
    fn test_password_in_submission_is_ignored() {
        let mut driver = existing_driver();
        let form: DriverLicenseUpdateForm = serde_json::from_value(json!({
            "first_name": " Jane ",
            "last_name": "Doe",
            "email": "",
            "license_number": "XYZ98765",
            "password": "hijack",
            "username": "hijack"
        }))
        .unwrap();

        form.full_clean(&()).unwrap().apply_to(&mut driver);

        assert_eq!(driver.first_name, "Jane");
        assert_eq!(driver.last_name, "Doe");
        assert_eq!(driver.email, "");
        assert_eq!(driver.license_number, "XYZ98765");
        assert_eq!(driver.username, "jsmith");
        assert_eq!(driver.password_hash, "$2b$04$existinghash");
    }
}
