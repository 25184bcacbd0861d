//! Driver Entity Implementation
//!
//! 운전자 엔티티의 핵심 구현체입니다.
//! 일반 사용자 계정에 운전면허 번호를 더한 모델이며,
//! 차량 배정 폼에서 운전자 후보 목록으로도 사용됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::forms::ModelInstance;

/// 운전자 엔티티
///
/// 저장과 생명주기는 호스트 애플리케이션의 영속 계층이 담당합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    /// 로그인 사용자명 (unique)
    pub username: String,
    /// bcrypt 해시 (응답에 직렬화하지 않음)
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// 빈 문자열 허용
    pub email: String,
    /// `LLLDDDDD` 형식 운전면허 번호
    pub license_number: String,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 가입 시간
    pub date_joined: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl Driver {
    /// 새 운전자 계정 생성
    ///
    /// 비밀번호는 이미 해싱된 값을 받습니다. 생성 직후 활성 상태입니다.
    pub fn new_local(
        username: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        email: String,
        license_number: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            first_name,
            last_name,
            email,
            license_number,
            is_active: true,
            date_joined: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// "이름 성" 형태의 전체 이름 (둘 다 비어 있으면 빈 문자열)
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// 수정 시간 갱신
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// 비밀번호 해시는 어떤 폼에도 초기값으로 내보내지 않습니다
impl ModelInstance for Driver {
    fn field_value(&self, field: &str) -> Option<serde_json::Value> {
        let value = match field {
            "id" => self.id_string(),
            "username" => self.username.clone(),
            "first_name" => self.first_name.clone(),
            "last_name" => self.last_name.clone(),
            "email" => self.email.clone(),
            "license_number" => self.license_number.clone(),
            _ => return None,
        };

        Some(serde_json::Value::String(value))
    }
}
