//! 차량 제조사 엔티티

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 차량 제조사
///
/// 차량 폼의 제조사 선택 후보로만 사용됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: Uuid,
    pub name: String,
    pub country: String,
}

impl Manufacturer {
    pub fn new(name: String, country: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            country,
        }
    }
}
