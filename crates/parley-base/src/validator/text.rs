use crate::validator::len;
use parley_core::{
    validate::{ValidateIssue, Validator},
    value::Value,
};
use serde::Serialize;

fn expect_text(value: &Value) -> Result<&str, ValidateIssue> {
    value
        .as_text()
        .ok_or_else(|| ValidateIssue::reason(format!("expected text, found {}", value.label())))
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

///
/// NikName
///
/// `@` followed by 2 to 31 word characters ([_a-zA-Z0-9]).
/// A missing `@` is added; every violated condition is reported.
///

#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct NikName;

impl NikName {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 32;
}

impl Validator for NikName {
    fn validate(&self, value: Value) -> Result<Value, ValidateIssue> {
        if value.is_null() {
            return Ok(value);
        }

        let raw = expect_text(&value)?;
        let nik = raw.strip_prefix('@').unwrap_or(raw);
        let len = nik.chars().count();

        let mut issue = ValidateIssue::new();
        if len < Self::MIN_LEN {
            issue.push(format!("value '{nik}' is too short"));
        }
        if len >= Self::MAX_LEN {
            issue.push(format!("value '{nik}' is too large"));
        }
        if !nik.chars().all(is_word_char) {
            issue.push(format!(
                "value '{nik}' has a wrong format: acceptable chars are [_a-zA-Z0-9]"
            ));
        }

        issue.result(Value::text(format!("@{nik}")))
    }
}

///
/// NameLen
/// Person-name length, 2 to 16 characters; `len::Range` over text only.
///

#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct NameLen;

impl NameLen {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 16;
}

impl Validator for NameLen {
    fn validate(&self, value: Value) -> Result<Value, ValidateIssue> {
        if value.is_null() {
            return Ok(value);
        }

        expect_text(&value)?;

        len::Range::new(Self::MIN_LEN, Self::MAX_LEN).validate(value)
    }
}

///
/// TESTS
///
