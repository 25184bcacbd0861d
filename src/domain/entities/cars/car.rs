//! Car Entity Implementation
//!
//! 차량 엔티티입니다. 제조사 하나를 참조하고,
//! 0명 이상의 운전자와 다대다 관계를 가집니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::forms::ModelInstance;

/// 차량 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: Uuid,
    /// 차종 이름
    pub model: String,
    pub manufacturer_id: Uuid,
    /// 배정된 운전자 ID (중복 없음, 선택 순서 유지)
    #[serde(default)]
    pub driver_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    pub fn new(model: String, manufacturer_id: Uuid, driver_ids: Vec<Uuid>) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            model,
            manufacturer_id,
            driver_ids,
            created_at: now,
            updated_at: now,
        }
    }

    /// 특정 운전자가 배정되어 있는지 확인
    pub fn has_driver(&self, driver_id: &Uuid) -> bool {
        self.driver_ids.contains(driver_id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl ModelInstance for Car {
    fn field_value(&self, field: &str) -> Option<serde_json::Value> {
        match field {
            "id" => Some(serde_json::json!(self.id.to_string())),
            "model" => Some(serde_json::json!(self.model)),
            "manufacturer" => Some(serde_json::json!(self.manufacturer_id.to_string())),
            "drivers" => Some(serde_json::json!(
                self.driver_ids
                    .iter()
                    .map(Uuid::to_string)
                    .collect::<Vec<_>>()
            )),
            _ => None,
        }
    }
}
