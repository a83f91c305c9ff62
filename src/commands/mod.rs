//! Command assemblers.
//!
//! Each assembler turns a raw command model into a validated command or
//! aggregate by running the domain smart constructors over every field and
//! combining the results.
//!
//! | Model                        | Output                  | Styles                   |
//! |------------------------------|-------------------------|--------------------------|
//! | `ActivateCommandModel`       | `ActivateCommand`       | fail-fast                |
//! | `DeactivateCommandModel`     | `DeactivateCommand`     | fail-fast                |
//! | `SetDailyLimitCommandModel`  | `SetDailyLimitCommand`  | fail-fast                |
//! | `ProcessPaymentCommandModel` | `ProcessPaymentCommand` | fail-fast                |
//! | `TopUpCommandModel`          | `TopUpCommand`          | fail-fast                |
//! | `CreateAddressCommandModel`  | `Address`               | fail-fast, accumulating  |
//! | `CreateUserCommandModel`     | `UserInfo`              | fail-fast, accumulating  |
//! | `CreateCardCommandModel`     | `Card`                  | fail-fast, accumulating  |
//!
//! Given all-valid input, the two styles return the same value.

mod address;
mod card;
mod card_operations;
pub mod fields;
mod models;
mod user;
mod validated;

pub use address::{validate_address_accumulating, validate_address_fail_fast};
pub use card::{
    validate_create_card_accumulating, validate_create_card_accumulating_with_config,
    validate_create_card_fail_fast, validate_create_card_fail_fast_with_config,
};
pub use card_operations::{
    validate_activate_command, validate_deactivate_command, validate_process_payment_command,
    validate_set_daily_limit_command, validate_top_up_command,
};
pub use models::{
    ActivateCommandModel, CreateAddressCommandModel, CreateCardCommandModel,
    CreateUserCommandModel, DeactivateCommandModel, ProcessPaymentCommandModel,
    SetDailyLimitCommandModel, TopUpCommandModel,
};
pub use user::{validate_create_user_accumulating, validate_create_user_fail_fast};
pub use validated::{
    ActivateCommand, DeactivateCommand, ProcessPaymentCommand, SetDailyLimitCommand, TopUpCommand,
};

use crate::validation::ValidationResult;

fn log_outcome<T>(command: &'static str, result: &ValidationResult<T>) {
    match result.errors() {
        None => tracing::trace!(command, "command validated"),
        Some(errors) => tracing::debug!(
            command,
            error_count = errors.len(),
            fields = %errors.field_paths().collect::<Vec<_>>().join(","),
            "command rejected"
        ),
    }
}
