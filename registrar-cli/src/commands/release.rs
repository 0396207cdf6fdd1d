//! `sign-data`, `sign-release` and `recover`

use lib_types::Address;
use serde_json::{json, Value};
use tracing::debug;

use crate::argument_parsing::ReleaseArgs;
use crate::error::CliResult;
use crate::logic::{parse_hex_bytes, recover_release_signer, sign_release, ReleaseRequest};

fn base_report(request: &ReleaseRequest) -> Value {
    json!({
        "contract": request.contract.to_string(),
        "label": request.fragment,
        "labelhash": request.label.to_string(),
        "expiry": request.expiry,
    })
}

pub fn sign_data_report(contract: Address, args: &ReleaseArgs) -> CliResult<Value> {
    let request = ReleaseRequest::new(contract, &args.label, args.expiry)?;
    let mut report = base_report(&request);
    report["sign_data"] = json!(format!("0x{}", hex::encode(request.sign_data())));
    Ok(report)
}

pub fn sign_release_report(contract: Address, args: &ReleaseArgs, secret_hex: &str) -> CliResult<Value> {
    let request = ReleaseRequest::new(contract, &args.label, args.expiry)?;
    let (signer, signature) = sign_release(secret_hex, &request)?;
    debug!("Signed release of {} for {}", request.fragment, signer);

    let mut report = base_report(&request);
    report["signer"] = json!(signer.to_string());
    report["signature"] = json!(format!("0x{}", hex::encode(signature)));
    Ok(report)
}

pub fn recover_report(contract: Address, args: &ReleaseArgs, signature_hex: &str) -> CliResult<Value> {
    let request = ReleaseRequest::new(contract, &args.label, args.expiry)?;
    let signature = parse_hex_bytes("signature", signature_hex)?;
    let signer = recover_release_signer(&request, &signature)?;

    let mut report = base_report(&request);
    report["signer"] = json!(signer.to_string());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(expiry: u64) -> ReleaseArgs {
        ReleaseArgs {
            label: "moody".to_string(),
            expiry,
            contract: None,
        }
    }

    #[test]
    fn test_sign_data_report_layout() {
        let contract = Address::new([0xc0; 20]);
        let report = sign_data_report(contract, &args(0x0102)).unwrap();
        let sign_data = report["sign_data"].as_str().unwrap();

        // 0x + 84 bytes
        assert_eq!(sign_data.len(), 2 + 168);
        assert!(sign_data.starts_with(&format!("0x{}", "c0".repeat(20))));
        assert!(sign_data.ends_with("0102"));
    }

    #[test]
    fn test_signed_release_recovers_to_signer() {
        let contract = Address::new([0xc0; 20]);
        let signed = sign_release_report(contract, &args(99), &format!("{:064x}", 1)).unwrap();
        let signature = signed["signature"].as_str().unwrap();

        let recovered = recover_report(contract, &args(99), signature).unwrap();
        assert_eq!(recovered["signer"], signed["signer"]);
        assert_eq!(recovered["signer"], "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf");
    }
}
