//! UPI deep-link payload construction.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use upiqr_common::Payee;

/// ISO currency code carried by every payment link.
pub const CURRENCY: &str = "INR";

/// Builds the `upi://pay` deep link for a fixed payee and a requested amount.
///
/// The display name is percent-encoded with every non-alphanumeric byte
/// escaped; the VPA is inserted verbatim, as UPI apps expect. The amount is
/// rendered as a bare decimal integer. Pure and deterministic: the same
/// inputs always yield a byte-identical string.
pub fn encode_payment_uri(payee: &Payee, amount: u32) -> String {
    let name = utf8_percent_encode(&payee.display_name, NON_ALPHANUMERIC);
    format!(
        "upi://pay?pa={}&pn={}&am={}&cu={}",
        payee.vpa, name, amount, CURRENCY
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use upiqr_common::test_utils::payment_fixtures;

    #[test]
    fn test_documented_vector() {
        let uri = encode_payment_uri(&payment_fixtures::test_payee(), 100);
        assert_eq!(
            uri,
            "upi://pay?pa=dreamhelper@upi&pn=Dream%20Helper&am=100&cu=INR"
        );
    }

    #[test]
    fn test_encoder_is_deterministic() {
        let payee = payment_fixtures::test_payee();
        assert_eq!(
            encode_payment_uri(&payee, 12345),
            encode_payment_uri(&payee, 12345)
        );
    }

    #[test]
    fn test_punctuation_and_non_ascii_escaped() {
        let uri = encode_payment_uri(&payment_fixtures::awkward_payee(), 50);
        assert!(uri.contains("pn=Ravi%20%26%20Sons%20Caf%C3%A9"));
        // The VPA side is never encoded.
        assert!(uri.contains("pa=ravi.sons@okbank"));
    }

    #[test]
    fn test_amount_has_no_formatting() {
        let uri = encode_payment_uri(&payment_fixtures::test_payee(), 100_000);
        assert!(uri.contains("&am=100000&"));
    }

    #[test]
    fn test_payload_parses_as_uri() {
        let uri = encode_payment_uri(&payment_fixtures::test_payee(), 250);
        let parsed = url::Url::parse(&uri).expect("payload must be a parseable URI");
        assert_eq!(parsed.scheme(), "upi");

        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("pa".to_string(), "dreamhelper@upi".to_string())));
        assert!(pairs.contains(&("pn".to_string(), "Dream Helper".to_string())));
        assert!(pairs.contains(&("am".to_string(), "250".to_string())));
        assert!(pairs.contains(&("cu".to_string(), "INR".to_string())));
    }

    proptest! {
        #[test]
        fn test_property_amount_rendered_verbatim(amount in 1u32..=100_000u32) {
            let uri = encode_payment_uri(&payment_fixtures::test_payee(), amount);
            let needle = format!("&am={}&cu=", amount);
            prop_assert!(uri.contains(&needle));
        }
    }
}
