pub mod len;
pub mod num;
pub mod record;
pub mod text;

use parley_core::validate::ValidateIssue;

// Configuration errors are carried by the validator and reported on every
// validation.
fn invalid_config(msg: impl Into<String>) -> ValidateIssue {
    ValidateIssue::reason(format!("invalid validator config: {}", msg.into()))
}
