//! Integration tests for the upiqr-payments crate.
//!
//! These walk the whole core path a successful command takes: raw arguments
//! through validation, payload encoding, and QR rasterization.

use upiqr_common::test_utils::{discord_fixtures, payment_fixtures};
use upiqr_payments::{render_png, PaymentRequest, MAX_AMOUNT_INR};

#[test]
fn test_valid_request_renders_end_to_end() {
    let request = PaymentRequest::new(
        payment_fixtures::test_payee(),
        discord_fixtures::test_requester_id(),
        discord_fixtures::test_recipient_id(),
        100,
    )
    .expect("arguments are within the accepted range");

    let uri = request.payment_uri();
    assert_eq!(
        uri,
        "upi://pay?pa=dreamhelper@upi&pn=Dream%20Helper&am=100&cu=INR"
    );

    let png = render_png(&uri).expect("payload fits a QR symbol");
    assert!(!png.is_empty());
}

#[test]
fn test_rejected_arguments_never_reach_the_renderer() {
    let payee = payment_fixtures::test_payee();
    let requester = discord_fixtures::test_requester_id();
    let recipient = discord_fixtures::test_recipient_id();

    for amount in [0, -1, MAX_AMOUNT_INR + 1] {
        assert!(PaymentRequest::new(payee.clone(), requester, recipient, amount).is_none());
    }
    assert!(PaymentRequest::new(payee, requester, requester, 100).is_none());
}

#[test]
fn test_maximum_amount_still_scannable() {
    let request = PaymentRequest::new(
        payment_fixtures::awkward_payee(),
        discord_fixtures::test_requester_id(),
        discord_fixtures::test_recipient_id(),
        MAX_AMOUNT_INR,
    )
    .unwrap();

    let png = render_png(&request.payment_uri()).unwrap();
    assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
}
