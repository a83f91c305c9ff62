//! Assemblers for the single- and paired-field card commands.
//!
//! The fields of these commands do not depend on each other and there are at
//! most two fallible ones, so they are composed fail-fast with `bind`.

use super::fields;
use super::log_outcome;
use super::models::{
    ActivateCommandModel, DeactivateCommandModel, ProcessPaymentCommandModel,
    SetDailyLimitCommandModel, TopUpCommandModel,
};
use super::validated::{
    ActivateCommand, DeactivateCommand, ProcessPaymentCommand, SetDailyLimitCommand, TopUpCommand,
};
use crate::domain::{CardNumber, DailyLimit, MoneyTransaction, UserId};
use crate::validation::ValidationResult;

/// Validates an [`ActivateCommandModel`].
///
/// # Examples
///
/// ```
/// use card_management::commands::{ActivateCommandModel, validate_activate_command};
/// use uuid::Uuid;
///
/// let model = ActivateCommandModel {
///     user_id: Uuid::nil(),
///     number: "1234 5678 1234 5678".to_string(),
/// };
/// let command = validate_activate_command(&model).to_option().unwrap();
/// assert_eq!(command.card_number.value(), "1234567812345678");
/// ```
pub fn validate_activate_command(
    model: &ActivateCommandModel,
) -> ValidationResult<ActivateCommand> {
    let user_id = UserId::new(model.user_id);
    let result = CardNumber::create(fields::CARD_NUMBER, &model.number).bind(|card_number| {
        ValidationResult::valid(ActivateCommand {
            user_id,
            card_number,
        })
    });
    log_outcome("activate", &result);
    result
}

/// Validates a [`DeactivateCommandModel`].
pub fn validate_deactivate_command(
    model: &DeactivateCommandModel,
) -> ValidationResult<DeactivateCommand> {
    let user_id = UserId::new(model.user_id);
    let result = CardNumber::create(fields::CARD_NUMBER, &model.number).bind(|card_number| {
        ValidationResult::valid(DeactivateCommand {
            user_id,
            card_number,
        })
    });
    log_outcome("deactivate", &result);
    result
}

/// Validates a [`SetDailyLimitCommandModel`].
///
/// The limit itself never fails: non-positive amounts become
/// [`DailyLimit::UNLIMITED`].
pub fn validate_set_daily_limit_command(
    model: &SetDailyLimitCommandModel,
) -> ValidationResult<SetDailyLimitCommand> {
    let user_id = UserId::new(model.user_id);
    let result = CardNumber::create(fields::CARD_NUMBER, &model.number).bind(|card_number| {
        DailyLimit::create(fields::LIMIT, model.limit).bind(|limit| {
            ValidationResult::valid(SetDailyLimitCommand {
                user_id,
                card_number,
                limit,
            })
        })
    });
    log_outcome("setDailyLimit", &result);
    result
}

/// Validates a [`ProcessPaymentCommandModel`].
pub fn validate_process_payment_command(
    model: &ProcessPaymentCommandModel,
) -> ValidationResult<ProcessPaymentCommand> {
    let user_id = UserId::new(model.user_id);
    let result = CardNumber::create(fields::CARD_NUMBER, &model.number).bind(|card_number| {
        MoneyTransaction::create(fields::PAYMENT_AMOUNT, model.payment_amount).bind(
            |payment_amount| {
                ValidationResult::valid(ProcessPaymentCommand {
                    user_id,
                    card_number,
                    payment_amount,
                })
            },
        )
    });
    log_outcome("processPayment", &result);
    result
}

/// Validates a [`TopUpCommandModel`].
pub fn validate_top_up_command(model: &TopUpCommandModel) -> ValidationResult<TopUpCommand> {
    let user_id = UserId::new(model.user_id);
    let result = CardNumber::create(fields::CARD_NUMBER, &model.number).bind(|card_number| {
        MoneyTransaction::create(fields::TOP_UP_AMOUNT, model.top_up_amount).bind(
            |top_up_amount| {
                ValidationResult::valid(TopUpCommand {
                    user_id,
                    card_number,
                    top_up_amount,
                })
            },
        )
    });
    log_outcome("topUp", &result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    const VALID_NUMBER: &str = "1234 5678 1234 5678";

    #[rstest]
    fn deactivate_rejects_short_number() {
        let model = DeactivateCommandModel {
            user_id: Uuid::nil(),
            number: "1234".to_string(),
        };

        let errors = validate_deactivate_command(&model).into_result().unwrap_err();
        assert_eq!(errors.field_paths().collect::<Vec<_>>(), vec![fields::CARD_NUMBER]);
    }

    #[rstest]
    fn payment_reports_only_the_card_number_when_both_fields_fail() {
        let model = ProcessPaymentCommandModel {
            user_id: Uuid::nil(),
            number: "bad".to_string(),
            payment_amount: Decimal::from(-3),
        };

        let errors = validate_process_payment_command(&model).into_result().unwrap_err();
        assert_eq!(errors.field_paths().collect::<Vec<_>>(), vec![fields::CARD_NUMBER]);
    }

    #[rstest]
    #[case(Decimal::ZERO)]
    #[case(Decimal::from(-10))]
    fn top_up_rejects_non_positive_amount(#[case] amount: Decimal) {
        let model = TopUpCommandModel {
            user_id: Uuid::nil(),
            number: VALID_NUMBER.to_string(),
            top_up_amount: amount,
        };

        let errors = validate_top_up_command(&model).into_result().unwrap_err();
        assert_eq!(errors.field_paths().collect::<Vec<_>>(), vec![fields::TOP_UP_AMOUNT]);
    }

    #[rstest]
    fn payment_keeps_user_and_amount() {
        let user = Uuid::new_v4();
        let model = ProcessPaymentCommandModel {
            user_id: user,
            number: VALID_NUMBER.to_string(),
            payment_amount: Decimal::new(1999, 2),
        };

        let command = validate_process_payment_command(&model).to_option().unwrap();
        assert_eq!(command.user_id, UserId::new(user));
        assert_eq!(command.payment_amount.value().amount(), Decimal::new(1999, 2));
    }
}
