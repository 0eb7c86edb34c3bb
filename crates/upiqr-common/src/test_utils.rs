//! Test utilities and shared test helpers for the UPI QR bot workspace.
//!
//! This module provides common testing utilities, fixtures, and helper
//! functions used across the workspace for unit and integration testing.

use std::sync::Once;
use tokio::runtime::Runtime;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    // No-op when tracing-subscriber is not available
}

/// Create a tokio runtime for testing async functions.
/// This is useful for tests that need to run async code in a synchronous test context.
pub fn create_test_runtime() -> Runtime {
    Runtime::new().expect("Failed to create test runtime")
}

/// Discord-related test fixtures.
pub mod discord_fixtures {
    use crate::UserId;

    /// Create a test user ID for the requester side of a payment.
    pub fn test_requester_id() -> UserId {
        UserId(123456789012345678)
    }

    /// Create a test user ID for the recipient side of a payment.
    pub fn test_recipient_id() -> UserId {
        UserId(987654321098765432)
    }

    /// Create multiple distinct test user IDs.
    pub fn test_user_ids(count: usize) -> Vec<UserId> {
        (0..count)
            .map(|i| UserId(100000000000000000 + i as u64))
            .collect()
    }
}

/// Payment-related test fixtures.
pub mod payment_fixtures {
    use crate::Payee;

    /// The payee identity used by the documented encoder test vector.
    pub fn test_payee() -> Payee {
        Payee {
            vpa: "dreamhelper@upi".to_string(),
            display_name: "Dream Helper".to_string(),
        }
    }

    /// A payee whose display name exercises punctuation and non-ASCII escaping.
    pub fn awkward_payee() -> Payee {
        Payee {
            vpa: "ravi.sons@okbank".to_string(),
            display_name: "Ravi & Sons Café".to_string(),
        }
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use crate::{Payee, UserId};
    use proptest::prelude::*;

    /// Strategy for generating valid Discord user IDs.
    pub fn user_id_strategy() -> impl Strategy<Value = UserId> {
        (100000000000000000u64..=999999999999999999u64).prop_map(UserId)
    }

    /// Strategy for generating amounts inside the accepted payment range.
    pub fn valid_amount_strategy() -> impl Strategy<Value = i64> {
        1i64..=100_000i64
    }

    /// Strategy for generating valid-looking virtual payment addresses.
    pub fn vpa_strategy() -> impl Strategy<Value = String> {
        r"[a-z0-9.]{3,20}@[a-z]{3,10}".prop_map(|s| s.to_string())
    }

    /// Strategy for generating payees with printable display names.
    pub fn payee_strategy() -> impl Strategy<Value = Payee> {
        (vpa_strategy(), r"[A-Za-z0-9 .&'-]{1,32}").prop_map(|(vpa, display_name)| Payee {
            vpa,
            display_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_create_test_runtime() {
        let runtime = create_test_runtime();
        let result = runtime.block_on(async { 42 });
        assert_eq!(result, 42);
        // Runtime is dropped here outside of async context
    }

    #[test]
    fn test_fixture_users_are_distinct() {
        assert_ne!(
            discord_fixtures::test_requester_id(),
            discord_fixtures::test_recipient_id()
        );

        let ids = discord_fixtures::test_user_ids(5);
        assert_eq!(ids.len(), 5);
        assert!(ids.windows(2).all(|pair| pair[0] != pair[1]));
    }

    #[cfg(feature = "proptest")]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_property_user_id_display(id in property_testing::user_id_strategy()) {
                let displayed = format!("{}", id);
                let parsed: u64 = displayed.parse().unwrap();
                assert_eq!(id.0, parsed);
            }

            #[test]
            fn test_property_vpa_has_handle(vpa in property_testing::vpa_strategy()) {
                assert!(vpa.contains('@'));
            }
        }
    }
}
