//! # 운전자 계정 서비스 구현
//!
//! 운전자 생성 폼과 면허 정보 수정 폼의 처리 흐름을 담당합니다.
//!
//! ```text
//! DriverCreateForm ──full_clean──▶ CleanedDriverCreate ──bcrypt──▶ Driver (신규)
//! DriverLicenseUpdateForm ──full_clean──▶ CleanedDriverLicenseUpdate ──apply──▶ Driver (기존)
//! ```
//!
//! 저장은 호스트 애플리케이션의 영속 계층이 담당합니다.
//! 이 서비스는 검증된 엔티티를 만들거나 고쳐서 돌려줄 뿐입니다.
//!
//! ## 보안
//!
//! - **bcrypt 해싱**: 환경별 cost ([`PasswordConfig`])
//! - **로그**: 운전자 ID만 기록 (비밀번호, 해시, 면허 번호는 기록하지 않음)

use bcrypt::hash;
use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::entities::Driver;
use crate::domain::forms::{DriverCreateForm, DriverLicenseUpdateForm, Form};

/// 운전자 계정 폼 처리 서비스
#[derive(Debug, Clone)]
pub struct DriverService {
    /// bcrypt 해싱 비용 (4-15)
    bcrypt_cost: u32,
}

impl Default for DriverService {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverService {
    /// 현재 환경 설정의 bcrypt cost로 서비스를 만듭니다
    pub fn new() -> Self {
        Self::with_bcrypt_cost(PasswordConfig::bcrypt_cost())
    }

    pub fn with_bcrypt_cost(bcrypt_cost: u32) -> Self {
        Self { bcrypt_cost }
    }

    /// 새 운전자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **폼 정리**: 필드 검증, 면허 번호 규칙, 비밀번호 확인
    /// 2. **비밀번호 해싱**: bcrypt
    /// 3. **엔티티 생성**: 활성 상태의 새 Driver
    ///
    /// # 반환값
    ///
    /// * `Ok(Driver)` - 저장 전의 새 운전자
    /// * `Err(AppError::ValidationError)` - 필드별 폼 에러
    /// * `Err(AppError::InternalError)` - 해싱 실패
    pub fn create_driver(&self, form: DriverCreateForm) -> AppResult<Driver> {
        let cleaned = form.full_clean(&()).inspect_err(|errors| {
            log::debug!("Driver creation form rejected: {}", errors);
        })?;

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&cleaned.password, self.bcrypt_cost)
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let driver = Driver::new_local(
            cleaned.username,
            password_hash,
            cleaned.first_name,
            cleaned.last_name,
            cleaned.email,
            cleaned.license_number,
        );

        log::info!("Driver created: id={}", driver.id);

        Ok(driver)
    }

    /// 기존 운전자의 이름, 이메일, 면허 번호 수정
    ///
    /// 검증에 실패하면 운전자는 전혀 바뀌지 않습니다.
    /// 사용자명과 비밀번호 해시는 이 폼으로 바꿀 수 없습니다.
    pub fn update_driver_license(
        &self,
        driver: &mut Driver,
        form: DriverLicenseUpdateForm,
    ) -> AppResult<()> {
        let cleaned = form.full_clean(&()).inspect_err(|errors| {
            log::debug!("Driver update form rejected for {}: {}", driver.id, errors);
        })?;

        let license_changed = cleaned.license_number != driver.license_number;
        cleaned.apply_to(driver);

        if license_changed {
            log::info!("Driver {} license number changed", driver.id);
        } else {
            log::info!("Driver {} updated", driver.id);
        }

        Ok(())
    }

    /// 수정 화면 초기값용 폼
    pub fn update_form_for(&self, driver: &Driver) -> DriverLicenseUpdateForm {
        DriverLicenseUpdateForm::from_instance(driver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::validators::license_number::{LENGTH_MESSAGE, PREFIX_MESSAGE, SUFFIX_MESSAGE};
    use serde_json::json;

    fn service() -> DriverService {
        crate::config::try_init_test_logging();
        DriverService::with_bcrypt_cost(4)
    }

    fn create_form(license_number: &str) -> DriverCreateForm {
        serde_json::from_value(json!({
            "username": "jsmith",
            "password1": "Str0ngPassw0rd",
            "password2": "Str0ngPassw0rd",
            "first_name": "John",
            "last_name": "Smith",
            "email": "john@example.com",
            "license_number": license_number
        }))
        .unwrap()
    }

    fn validation_messages(error: AppError, field: &str) -> Vec<String> {
        match error {
            AppError::ValidationError(errors) => errors
                .messages(field)
                .into_iter()
                .map(str::to_string)
                .collect(),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_create_driver_hashes_password() {
        let driver = service().create_driver(create_form("ABC12345")).unwrap();

        assert_eq!(driver.username, "jsmith");
        assert_eq!(driver.license_number, "ABC12345");
        assert!(driver.is_active);
        assert_ne!(driver.password_hash, "Str0ngPassw0rd");
        assert!(bcrypt::verify("Str0ngPassw0rd", &driver.password_hash).unwrap());
    }

    #[test]
    fn test_create_driver_rejects_invalid_license_numbers() {
        let service = service();

        for (license_number, expected) in [
            ("AB1234567", LENGTH_MESSAGE),
            ("abc12345", PREFIX_MESSAGE),
            ("ABC1234X", SUFFIX_MESSAGE),
            ("", LENGTH_MESSAGE),
        ] {
            let error = service.create_driver(create_form(license_number)).unwrap_err();
            assert_eq!(validation_messages(error, "license_number"), vec![expected]);
        }
    }

    #[test]
    fn test_invalid_bcrypt_cost_is_internal_error() {
        let error = DriverService::with_bcrypt_cost(99)
            .create_driver(create_form("ABC12345"))
            .unwrap_err();

        assert!(matches!(error, AppError::InternalError(_)));
    }

    #[test]
    fn test_update_driver_license() {
        let service = service();
        let mut driver = service.create_driver(create_form("ABC12345")).unwrap();
        let original_hash = driver.password_hash.clone();

        let mut form = service.update_form_for(&driver);
        form.license_number = Some("XYZ54321".to_string());
        service.update_driver_license(&mut driver, form).unwrap();

        assert_eq!(driver.license_number, "XYZ54321");
        assert_eq!(driver.password_hash, original_hash);
        assert!(driver.updated_at >= driver.date_joined);
    }

    #[test]
    fn test_rejected_update_leaves_driver_untouched() {
        let service = service();
        let mut driver = service.create_driver(create_form("ABC12345")).unwrap();
        let before = driver.clone();

        let mut form = service.update_form_for(&driver);
        form.first_name = "Jane".to_string();
        form.license_number = Some("ABC1234X".to_string());
        let error = service.update_driver_license(&mut driver, form).unwrap_err();

        assert_eq!(validation_messages(error, "license_number"), vec![SUFFIX_MESSAGE]);
        assert_eq!(driver, before);
    }
}
