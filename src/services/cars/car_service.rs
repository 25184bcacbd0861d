//! # 차량 서비스 구현
//!
//! 차량 폼을 처리해 새 차량을 만들거나 기존 차량의 정보와 운전자 배정을 바꿉니다.
//! 운전자/제조사 후보 목록은 호출자가 [`CarFormContext`]로 넘깁니다.

use crate::core::errors::AppResult;
use crate::domain::entities::Car;
use crate::domain::forms::{CarForm, CarFormContext, Form};

/// 차량 폼 처리 서비스
#[derive(Debug, Clone, Default)]
pub struct CarService;

impl CarService {
    pub fn new() -> Self {
        Self
    }

    /// 새 차량 생성
    ///
    /// 운전자를 한 명도 고르지 않아도 됩니다.
    pub fn create_car(&self, form: CarForm, context: &CarFormContext) -> AppResult<Car> {
        let cleaned = form.full_clean(context).inspect_err(|errors| {
            log::debug!("Car form rejected: {}", errors);
        })?;

        let car = Car::new(cleaned.model, cleaned.manufacturer_id, cleaned.driver_ids);

        log::info!(
            "Car created: id={}, model={}, drivers={}",
            car.id,
            car.model,
            car.driver_ids.len()
        );

        Ok(car)
    }

    /// 기존 차량의 차종, 제조사, 운전자 배정을 교체
    ///
    /// 검증에 실패하면 차량은 바뀌지 않습니다.
    pub fn update_car(&self, car: &mut Car, form: CarForm, context: &CarFormContext) -> AppResult<()> {
        let cleaned = form.full_clean(context).inspect_err(|errors| {
            log::debug!("Car form rejected for {}: {}", car.id, errors);
        })?;

        car.model = cleaned.model;
        car.manufacturer_id = cleaned.manufacturer_id;
        car.driver_ids = cleaned.driver_ids;
        car.touch();

        log::info!("Car {} updated with {} driver(s)", car.id, car.driver_ids.len());

        Ok(())
    }

    /// 수정 화면 초기값용 폼
    pub fn form_for(&self, car: &Car) -> CarForm {
        CarForm::from_instance(car)
    }
}
