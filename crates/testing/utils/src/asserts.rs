//! Assertions on error messages

use core::fmt::Display;

/// When set, [`ResultAssertsExt::assert_error_contains`] only checks that
/// the result is an error
pub const SKIP_MESSAGE_CHECKS: &str = "SIGENV_SKIP_MESSAGE_CHECKS";

pub trait ResultAssertsExt {
    /// Panics unless `self` is an `Err` whose message contains `needle`
    fn assert_error_contains(&self, needle: &str);
}

impl<T, E: Display> ResultAssertsExt for Result<T, E> {
    #[track_caller]
    fn assert_error_contains(&self, needle: &str) {
        let Err(err) = self else {
            panic!("expected an error mentioning `{needle}`, got Ok");
        };
        if message_checks_disabled() {
            return;
        }
        let message = err.to_string();
        assert!(
            message.contains(needle),
            "error `{message}` does not mention `{needle}`"
        );
    }
}

fn message_checks_disabled() -> bool {
    std::env::var_os(SKIP_MESSAGE_CHECKS).is_some()
}
