//! Short code generation and validation.
//!
//! Generated codes are drawn uniformly from the 62-character alphanumeric
//! alphabet. Randomness is not cryptographically secure; collisions are
//! accepted and handled by the caller's retry loop.

use rand::Rng;
use serde_json::json;

use crate::error::AppError;
use crate::utils::reserved::is_reserved_segment;

const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of automatically generated codes.
pub const GENERATED_CODE_LEN: usize = 6;

/// Length bounds for user-supplied custom codes.
pub const CUSTOM_CODE_MIN_LEN: usize = 6;
pub const CUSTOM_CODE_MAX_LEN: usize = 8;

/// Generates a random code of `len` alphanumeric characters.
pub fn generate_code(len: usize) -> String {
    let mut rng = rand::rng();

    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Derives a last-resort code from a millisecond timestamp plus a short
/// random suffix, truncated to the generated code length.
///
/// Callers must still confirm the result is unused before inserting it.
pub fn fallback_code(now_millis: i64) -> String {
    let mut code = to_base36(now_millis.unsigned_abs());
    code.push_str(&generate_code(2));
    code.truncate(GENERATED_CODE_LEN);
    code
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }

    let mut out = String::new();
    while n > 0 {
        out.insert(0, DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    out
}

/// Validates a user-supplied custom short code.
///
/// # Rules
///
/// - Length: 6-8 characters
/// - Allowed characters: ASCII letters and digits
/// - Cannot shadow a fixed route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !(CUSTOM_CODE_MIN_LEN..=CUSTOM_CODE_MAX_LEN).contains(&code.len())
        || !code.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(AppError::bad_request(
            "code must be [A-Za-z0-9]{6,8}",
            json!({ "code": code }),
        ));
    }

    if is_reserved_segment(code) {
        return Err(AppError::bad_request(
            "this code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
