//! `namehash` and `labelhash`

use lib_crypto::{labelhash, namehash};
use serde_json::{json, Value};

use crate::error::CliResult;
use crate::logic::{validate_fragment, validate_name};

pub fn namehash_report(name: &str) -> CliResult<Value> {
    validate_name(name)?;
    Ok(json!({
        "name": name,
        "namehash": namehash(name).to_string(),
    }))
}

pub fn labelhash_report(fragment: &str) -> CliResult<Value> {
    validate_fragment(fragment)?;
    Ok(json!({
        "label": fragment,
        "labelhash": labelhash(fragment).to_string(),
    }))
}
