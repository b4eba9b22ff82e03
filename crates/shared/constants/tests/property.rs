use parkpasses_constants::{ConstantKey, ConstantsError, ConstantsRegistry, ErrorKind, system_error_message};
use proptest::prelude::*;
use std::str::FromStr;

proptest! {
    #[test]
    fn system_message_ends_with_any_support_email(email in "[a-z0-9.]{1,20}@[a-z]{1,10}\\.[a-z]{2,3}") {
        let registry = ConstantsRegistry::builder().support_email(email.clone()).build().unwrap();
        let message = registry.error(ErrorKind::System);
        prop_assert!(message.ends_with(&email));
        prop_assert_eq!(message.into_owned(), system_error_message(&email));
    }

    #[test]
    fn unknown_keys_always_fail(key in "[A-Za-z_]{0,40}") {
        prop_assume!(ConstantKey::from_str(&key).is_err() && key != ConstantKey::ERRORS);
        let result = ConstantsRegistry::global().get(&key);
        prop_assert!(matches!(result, Err(ConstantsError::UnknownKey { .. })), "expected UnknownKey error, got {:?}", result);
    }
}
