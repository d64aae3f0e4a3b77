//! Service-area gate for client event locations.
//!
//! The business only travels to five states. Callers may send a full state
//! name or its postal abbreviation in any casing; stored records only ever
//! carry the two-letter code.
//!
//! Checking and canonicalizing are separate steps. [`is_serviceable`] decides
//! whether a request can be accepted at all, [`normalize`] maps an accepted
//! spelling onto its code, and [`canonicalize`] runs both in order.

use thiserror::Error;

/// Every spelling accepted on input, already lowercased.
const ACCEPTED_SPELLINGS: [&str; 10] = [
    "pa",
    "pennsylvania",
    "nj",
    "new jersey",
    "ny",
    "new york",
    "de",
    "delaware",
    "md",
    "maryland",
];

/// Full lowercase name to postal code.
const NAME_TO_CODE: [(&str, &str); 5] = [
    ("pennsylvania", "PA"),
    ("new jersey", "NJ"),
    ("new york", "NY"),
    ("delaware", "DE"),
    ("maryland", "MD"),
];

/// The only values ever persisted in `client.state`.
pub const CANONICAL_CODES: [&str; 5] = ["PA", "NJ", "NY", "DE", "MD"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceAreaError {
    /// The caller asked for a state outside the service area.
    #[error("I'm sorry, {0} is not within our service range")]
    OutOfRange(String),
    /// `normalize` found no code for input that was supposed to be gated.
    #[error("state {0:?} passed the service-area check but has no canonical code")]
    MissingCanonical(String),
}

/// True iff the lowercased input is one of the accepted spellings.
///
/// No trimming and no partial matching: `" pa"` and `"penn"` are rejected.
pub fn is_serviceable(state: &str) -> bool {
    let lower = state.to_lowercase();
    ACCEPTED_SPELLINGS.contains(&lower.as_str())
}

/// Canonical two-letter code for a spelling that already passed [`is_serviceable`].
///
/// Any two-character input is upper-cased and returned as-is without checking
/// it against [`CANONICAL_CODES`]; the gate is what keeps `"xx"` out. Longer
/// input without a table entry yields [`ServiceAreaError::MissingCanonical`].
pub fn normalize(state: &str) -> Result<String, ServiceAreaError> {
    if state.chars().count() == 2 {
        return Ok(state.to_uppercase());
    }

    let lower = state.to_lowercase();
    NAME_TO_CODE
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, code)| (*code).to_string())
        .ok_or_else(|| ServiceAreaError::MissingCanonical(state.to_string()))
}

/// Gate then normalize. This is the only entry point the write paths use.
pub fn canonicalize(state: &str) -> Result<String, ServiceAreaError> {
    if !is_serviceable(state) {
        return Err(ServiceAreaError::OutOfRange(state.to_string()));
    }
    normalize(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_spelling_in_any_casing() {
        for s in ACCEPTED_SPELLINGS {
            assert!(is_serviceable(s), "{s}");
            assert!(is_serviceable(&s.to_uppercase()), "{s}");
        }
        assert!(is_serviceable("New Jersey"));
        assert!(is_serviceable("mArYlAnD"));
        assert!(is_serviceable("Pa"));
    }

    #[test]
    fn rejects_everything_else() {
        for s in ["Ohio", "oh", "xx", "", " pa", "pa ", "new  york", "penn", "newyork"] {
            assert!(!is_serviceable(s), "{s:?}");
        }
    }

    #[test]
    fn pennsylvania_spellings_normalize_to_pa() {
        for s in ["Pennsylvania", "PENNSYLVANIA", "pa", "PA"] {
            assert_eq!(normalize(s).unwrap(), "PA");
        }
    }

    #[test]
    fn full_names_map_to_codes() {
        assert_eq!(normalize("new jersey").unwrap(), "NJ");
        assert_eq!(normalize("new york").unwrap(), "NY");
        assert_eq!(normalize("delaware").unwrap(), "DE");
        assert_eq!(normalize("maryland").unwrap(), "MD");
    }

    #[test]
    fn every_accepted_spelling_lands_on_a_canonical_code() {
        for s in ACCEPTED_SPELLINGS {
            let code = canonicalize(s).unwrap();
            assert!(CANONICAL_CODES.contains(&code.as_str()), "{s} -> {code}");
        }
    }

    #[test]
    fn normalize_is_idempotent_on_codes() {
        for s in ["pa", "Nj", "NY", "de", "mD"] {
            let once = normalize(s).unwrap();
            assert_eq!(normalize(&once).unwrap(), once);
        }
    }

    #[test]
    fn two_letter_fast_path_does_not_verify_the_code() {
        // normalize alone offers no protection; only the gate rejects "xx"
        assert!(!is_serviceable("xx"));
        assert_eq!(normalize("xx").unwrap(), "XX");
        assert_eq!(
            canonicalize("xx"),
            Err(ServiceAreaError::OutOfRange("xx".into()))
        );
    }

    #[test]
    fn ungated_long_input_is_an_internal_fault() {
        assert_eq!(
            normalize("Ohio"),
            Err(ServiceAreaError::MissingCanonical("Ohio".into()))
        );
    }

    #[test]
    fn out_of_range_message_names_the_requested_state() {
        let err = canonicalize("Ohio").unwrap_err();
        assert_eq!(err.to_string(), "I'm sorry, Ohio is not within our service range");
    }
}
