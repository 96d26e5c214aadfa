//! Lease end-time normalization.
//!
//! The orchestrator requires `lease_end_time` in a fixed space-separated
//! format with a numeric UTC offset (`2025-09-30 12:00:00 +0000`). Callers
//! hand us either that format or RFC 3339; conversion is one-directional at
//! this boundary and always happens before anything goes on the wire.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{FabricError, Result};

/// strftime pattern for the orchestrator's `lease_end_time` wire format.
pub const LEASE_WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Normalize a caller-supplied lease end time to the wire format.
///
/// Empty input passes through empty — the caller substitutes its own
/// default before getting here or accepts the orchestrator's. RFC 3339
/// input is reformatted preserving the instant and UTC offset; input
/// already in the wire format is returned unchanged.
pub fn normalize_lease(input: &str) -> Result<String> {
    if input.is_empty() {
        return Ok(String::new());
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(input) {
        return Ok(t.format(LEASE_WIRE_FORMAT).to_string());
    }
    if DateTime::parse_from_str(input, LEASE_WIRE_FORMAT).is_ok() {
        return Ok(input.to_string());
    }
    Err(FabricError::InvalidLeaseFormat(input.to_string()))
}

/// Default lease horizon (now + 24 hours) in RFC 3339, for callers that
/// left the end time unset.
pub fn default_lease_end() -> String {
    (Utc::now() + chrono::Duration::hours(24)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_is_reformatted() {
        let lease = normalize_lease("2025-09-30T12:00:00Z").unwrap();
        assert_eq!(lease, "2025-09-30 12:00:00 +0000");
    }

    #[test]
    fn offset_is_preserved() {
        let lease = normalize_lease("2025-01-02T03:04:05-05:00").unwrap();
        assert_eq!(lease, "2025-01-02 03:04:05 -0500");
    }

    #[test]
    fn wire_format_passes_through_unchanged() {
        let lease = normalize_lease("2025-09-30 12:00:00 +0000").unwrap();
        assert_eq!(lease, "2025-09-30 12:00:00 +0000");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize_lease("").unwrap(), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_lease("2025-09-30T12:00:00Z").unwrap();
        let twice = normalize_lease(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn malformed_input_is_rejected_with_the_offending_value() {
        let err = normalize_lease("not-a-date").unwrap_err();
        match err {
            FabricError::InvalidLeaseFormat(input) => assert_eq!(input, "not-a-date"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_lease_end_is_rfc3339() {
        let lease = default_lease_end();
        assert!(DateTime::parse_from_rfc3339(&lease).is_ok());
        // And it normalizes cleanly to the wire format.
        assert!(normalize_lease(&lease).is_ok());
    }
}
