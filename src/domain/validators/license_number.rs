//! # 운전면허 번호 검증
//!
//! 운전자 계정의 `license_number` 필드 형식 규칙을 담당합니다.
//! 운전자 생성 폼과 면허 정보 수정 폼이 동일한 함수를 명시적으로 호출합니다.
//!
//! ## 형식
//!
//! ```text
//! LLLDDDDD
//! ├┘  └─┬─┘
//! │     └── 숫자 5자리
//! └──────── 대문자 알파벳 3자리
//! ```
//!
//! ## 검증 순서
//!
//! 1. 길이 (정확히 8자, 바이트가 아닌 문자 단위)
//! 2. 앞 3자리 대문자 알파벳 여부
//! 3. 뒤 5자리 숫자 여부
//!
//! 문자 분류는 유니코드 기준입니다. 접두부는 모두 문자이고 대문자가 하나 이상,
//! 소문자가 없어야 하므로 대소문자 구분이 없는 문자(한글 등)가 대문자와 섞여도 됩니다.
//! 접미부는 ASCII 외 숫자(아랍-인도 숫자 등)도 허용합니다.
//!
//! 여러 규칙을 동시에 위반하더라도 가장 먼저 위반한 규칙 하나만 보고합니다.
//! 공백 제거, 대소문자 변환 등의 정규화는 하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::validators::clean_license_number;
//!
//! assert_eq!(clean_license_number("ABC12345"), Ok("ABC12345"));
//! assert!(clean_license_number("abc12345").is_err());
//! ```

use thiserror::Error;

/// 면허 번호 전체 길이 (문자 수)
pub const LICENSE_NUMBER_LENGTH: usize = 8;

/// 알파벳 접두부 길이
const PREFIX_LENGTH: usize = 3;

pub const LENGTH_MESSAGE: &str = "The license number must be exactly 8 characters long.";
pub const PREFIX_MESSAGE: &str =
    "The first three characters of the license number must be uppercase letters.";
pub const SUFFIX_MESSAGE: &str = "The last five characters of the license number must be digits.";

/// 면허 번호 형식 위반 에러
///
/// 세 가지 고정 메시지 중 하나를 담으며, 항상 `license_number` 필드에 귀속됩니다.
/// 사용자가 값을 고쳐 다시 제출하면 복구 가능한 에러입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LicenseNumberError {
    #[error("{0}")]
    InvalidFormat(&'static str),
}

impl LicenseNumberError {
    /// 폼 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            LicenseNumberError::InvalidFormat(_) => "invalid_format",
        }
    }

    /// 사용자에게 표시할 메시지
    pub fn message(&self) -> &'static str {
        match self {
            LicenseNumberError::InvalidFormat(message) => message,
        }
    }
}

/// 면허 번호를 검증하고 그대로 반환합니다
///
/// # 인자
///
/// * `license_number` - 제출된 면허 번호 문자열
///
/// # 반환값
///
/// * `Ok(&str)` - 입력과 동일한 문자열
/// * `Err(LicenseNumberError::InvalidFormat)` - 처음 위반한 규칙의 메시지
pub fn clean_license_number(license_number: &str) -> Result<&str, LicenseNumberError> {
    if license_number.chars().count() != LICENSE_NUMBER_LENGTH {
        return Err(LicenseNumberError::InvalidFormat(LENGTH_MESSAGE));
    }

    // 문자 경계에서 분리 (멀티바이트 문자 대비)
    let split_at = license_number
        .char_indices()
        .nth(PREFIX_LENGTH)
        .map_or(license_number.len(), |(index, _)| index);
    let (prefix, suffix) = license_number.split_at(split_at);

    if !is_uppercase_letters(prefix) {
        return Err(LicenseNumberError::InvalidFormat(PREFIX_MESSAGE));
    }

    if !suffix.chars().all(char::is_numeric) {
        return Err(LicenseNumberError::InvalidFormat(SUFFIX_MESSAGE));
    }

    Ok(license_number)
}

/// 모두 문자이고, 대소문자가 있는 문자는 전부 대문자이며, 대문자가 하나 이상
fn is_uppercase_letters(value: &str) -> bool {
    value.chars().all(char::is_alphabetic)
        && value.chars().any(char::is_uppercase)
        && !value.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(value: &str) -> &'static str {
        clean_license_number(value).unwrap_err().message()
    }

    #[test]
    fn test_valid_license_number_is_returned_unchanged() {
        assert_eq!(clean_license_number("ABC12345"), Ok("ABC12345"));
        assert_eq!(clean_license_number("ZZZ00000"), Ok("ZZZ00000"));
        assert_eq!(clean_license_number("QWE98765"), Ok("QWE98765"));
    }

    #[test]
    fn test_wrong_length_reports_length_message() {
        assert_eq!(message_of(""), LENGTH_MESSAGE);
        assert_eq!(message_of("AB1234567"), LENGTH_MESSAGE);
        assert_eq!(message_of("ABC1234"), LENGTH_MESSAGE);
        assert_eq!(message_of("ABC123456"), LENGTH_MESSAGE);
        // 다른 규칙도 위반하지만 길이가 먼저
        assert_eq!(message_of("abc"), LENGTH_MESSAGE);
    }

    #[test]
    fn test_no_trimming_is_performed() {
        assert_eq!(message_of(" ABC12345"), LENGTH_MESSAGE);
        assert_eq!(message_of("ABC12345 "), LENGTH_MESSAGE);
        assert_eq!(message_of(" ABC1234"), PREFIX_MESSAGE);
    }

    #[test]
    fn test_invalid_prefix_reports_prefix_message() {
        assert_eq!(message_of("abc12345"), PREFIX_MESSAGE);
        assert_eq!(message_of("Abc12345"), PREFIX_MESSAGE);
        assert_eq!(message_of("AB123456"), PREFIX_MESSAGE);
        assert_eq!(message_of("A-C12345"), PREFIX_MESSAGE);
        // 접미부도 잘못되었지만 접두부가 먼저
        assert_eq!(message_of("abc1234X"), PREFIX_MESSAGE);
    }

    #[test]
    fn test_invalid_suffix_reports_suffix_message() {
        assert_eq!(message_of("ABC1234X"), SUFFIX_MESSAGE);
        assert_eq!(message_of("ABCD1234"), SUFFIX_MESSAGE);
        assert_eq!(message_of("ABC 1234"), SUFFIX_MESSAGE);
        assert_eq!(message_of("ABC-1234"), SUFFIX_MESSAGE);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 한글은 문자지만 대문자가 하나도 없음
        assert_eq!(message_of("가나다12345"), PREFIX_MESSAGE);
        assert_eq!(message_of("ÀBÇ1234X"), SUFFIX_MESSAGE);
        assert_eq!(clean_license_number("ÀBÇ12345"), Ok("ÀBÇ12345"));
    }

    #[test]
    fn test_unicode_digits_are_accepted_in_suffix() {
        assert_eq!(clean_license_number("ABC١٢٣٤٥"), Ok("ABC١٢٣٤٥"));
        assert_eq!(clean_license_number("XYZ१२३४५"), Ok("XYZ१२३४५"));
    }

    #[test]
    fn test_uncased_letters_may_mix_with_uppercase_prefix() {
        assert_eq!(clean_license_number("AB가12345"), Ok("AB가12345"));
        assert_eq!(message_of("Ab가12345"), PREFIX_MESSAGE);
        assert_eq!(message_of("A1가12345"), PREFIX_MESSAGE);
    }

    #[test]
    fn test_error_code_and_display() {
        let error = clean_license_number("abc12345").unwrap_err();

        assert_eq!(error.code(), "invalid_format");
        assert_eq!(error.to_string(), PREFIX_MESSAGE);
    }
}
