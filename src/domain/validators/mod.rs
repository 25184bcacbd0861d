//! 도메인 필드 검증 함수 모듈
//!
//! 특정 폼에 묶이지 않는 독립 검증 함수들을 제공합니다.
//! 각 폼은 필요한 검증 함수를 자신의 폼 수준 훅에서 직접 호출합니다.
//!
//! - [`license_number`] - 운전면허 번호 형식 검증

pub mod license_number;

pub use license_number::{clean_license_number, LicenseNumberError};
