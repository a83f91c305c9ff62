//! User assembler, fail-fast and accumulating.
//!
//! The address is optional in the command model but required for a valid
//! user. Its field errors are reported under the `address.` prefix.

use super::address::{validate_address_accumulating, validate_address_fail_fast};
use super::fields;
use super::log_outcome;
use super::models::CreateUserCommandModel;
use crate::domain::{LetterString, UserId, UserInfo};
use crate::validation::ValidationResult;

/// Validates a user, stopping at the first invalid field.
///
/// Fields are checked in the order name, address.
pub fn validate_create_user_fail_fast(
    user_id: UserId,
    model: &CreateUserCommandModel,
) -> ValidationResult<UserInfo> {
    let result = LetterString::create(fields::NAME, &model.name).bind(|name| {
        ValidationResult::required(fields::ADDRESS, model.address.as_ref())
            .bind(|address| validate_address_fail_fast(address).nested_under(fields::ADDRESS))
            .bind(|address| ValidationResult::valid(UserInfo::from_parts(user_id, name, address)))
    });
    log_outcome("createUser", &result);
    result
}

/// Validates a user, reporting every invalid field.
///
/// # Examples
///
/// ```
/// use card_management::commands::{CreateUserCommandModel, validate_create_user_accumulating};
/// use card_management::domain::UserId;
///
/// let model = CreateUserCommandModel { name: String::new(), address: None };
/// let errors = validate_create_user_accumulating(UserId::generate(), &model)
///     .into_result()
///     .unwrap_err();
///
/// assert_eq!(errors.field_paths().collect::<Vec<_>>(), vec!["name", "address"]);
/// ```
pub fn validate_create_user_accumulating(
    user_id: UserId,
    model: &CreateUserCommandModel,
) -> ValidationResult<UserInfo> {
    let address = ValidationResult::required(fields::ADDRESS, model.address.as_ref())
        .bind(|address| validate_address_accumulating(address).nested_under(fields::ADDRESS));

    let result = LetterString::create(fields::NAME, &model.name)
        .map2(address, |name, address| UserInfo::from_parts(user_id, name, address));
    log_outcome("createUser", &result);
    result
}
