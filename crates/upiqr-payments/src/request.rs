//! Per-invocation payment request validation.

use crate::payload::encode_payment_uri;
use upiqr_common::{Payee, UserId};

/// Inclusive upper bound on a single payment request, in rupees.
pub const MAX_AMOUNT_INR: i64 = 100_000;

/// A validated payment request.
///
/// One of these exists only for the duration of a single command invocation;
/// nothing is persisted across requests. Construction is the validation
/// boundary: a request outside the accepted range never becomes a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Fixed payee identity the QR code pays into.
    pub payee: Payee,
    /// User who issued the command.
    pub requester: UserId,
    /// User who receives the QR code.
    pub recipient: UserId,
    /// Requested amount in whole rupees.
    pub amount: u32,
}

impl PaymentRequest {
    /// Validates the raw command arguments into a request.
    ///
    /// Returns `None` when the amount is outside `(0, 100000]` or when the
    /// requester targets themselves. Callers treat `None` as a silent no-op.
    pub fn new(payee: Payee, requester: UserId, recipient: UserId, amount: i64) -> Option<Self> {
        if amount <= 0 || amount > MAX_AMOUNT_INR {
            return None;
        }

        if requester == recipient {
            return None;
        }

        let amount = u32::try_from(amount).ok()?;
        Some(Self {
            payee,
            requester,
            recipient,
            amount,
        })
    }

    /// The `upi://pay` deep link for this request.
    pub fn payment_uri(&self) -> String {
        encode_payment_uri(&self.payee, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use upiqr_common::test_utils::{discord_fixtures, payment_fixtures};

    fn request(amount: i64) -> Option<PaymentRequest> {
        PaymentRequest::new(
            payment_fixtures::test_payee(),
            discord_fixtures::test_requester_id(),
            discord_fixtures::test_recipient_id(),
            amount,
        )
    }

    #[test]
    fn test_accepts_range_bounds() {
        assert_eq!(request(1).unwrap().amount, 1);
        assert_eq!(request(MAX_AMOUNT_INR).unwrap().amount, 100_000);
    }

    #[test]
    fn test_rejects_out_of_range_amounts() {
        assert!(request(0).is_none());
        assert!(request(-5).is_none());
        assert!(request(MAX_AMOUNT_INR + 1).is_none());
    }

    #[test]
    fn test_rejects_self_payment() {
        let requester = discord_fixtures::test_requester_id();
        let rejected =
            PaymentRequest::new(payment_fixtures::test_payee(), requester, requester, 100);
        assert!(rejected.is_none());
    }

    #[test]
    fn test_payment_uri_uses_validated_amount() {
        let request = request(750).unwrap();
        assert_eq!(
            request.payment_uri(),
            "upi://pay?pa=dreamhelper@upi&pn=Dream%20Helper&am=750&cu=INR"
        );
    }
}
