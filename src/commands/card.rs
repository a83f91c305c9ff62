//! Card assembler, fail-fast and accumulating.
//!
//! Fields are evaluated in the order card number, name, holder id, expiry
//! month, expiry year. A validated card always starts active with a default
//! account for its holder.

use super::fields;
use super::log_outcome;
use super::models::CreateCardCommandModel;
use crate::config::ValidationConfig;
use crate::domain::{Card, CardNumber, LetterString, Month, UserId, Year};
use crate::validation::ValidationResult;

/// Validates a card with the default configuration, stopping at the first
/// invalid field.
pub fn validate_create_card_fail_fast(model: &CreateCardCommandModel) -> ValidationResult<Card> {
    validate_create_card_fail_fast_with_config(model, &ValidationConfig::default())
}

/// Validates a card against `config`, stopping at the first invalid field.
pub fn validate_create_card_fail_fast_with_config(
    model: &CreateCardCommandModel,
    config: &ValidationConfig,
) -> ValidationResult<Card> {
    let result = CardNumber::create(fields::CARD_NUMBER, &model.card_number).bind(|card_number| {
        LetterString::create(fields::NAME, &model.name).bind(|name| {
            holder_id(model).bind(|holder_id| {
                Month::create(fields::EXPIRATION_MONTH, model.expiration_month).bind(|month| {
                    Year::create_within(
                        fields::EXPIRATION_YEAR,
                        model.expiration_year,
                        config.year_window,
                    )
                    .bind(|year| {
                        ValidationResult::valid(Card::issue(
                            card_number,
                            name,
                            holder_id,
                            (month, year),
                        ))
                    })
                })
            })
        })
    });
    log_outcome("createCard", &result);
    result
}

/// Validates a card with the default configuration, reporting every invalid
/// field.
///
/// # Examples
///
/// ```
/// use card_management::commands::{CreateCardCommandModel, validate_create_card_accumulating};
///
/// let model = CreateCardCommandModel {
///     card_number: "000".to_string(),
///     name: "Alice".to_string(),
///     holder_id: None,
///     expiration_month: 12,
///     expiration_year: 2030,
/// };
///
/// let errors = validate_create_card_accumulating(&model).into_result().unwrap_err();
/// assert_eq!(
///     errors.field_paths().collect::<Vec<_>>(),
///     vec!["cardNumber", "holderId"]
/// );
/// ```
pub fn validate_create_card_accumulating(model: &CreateCardCommandModel) -> ValidationResult<Card> {
    validate_create_card_accumulating_with_config(model, &ValidationConfig::default())
}

/// Validates a card against `config`, reporting every invalid field.
pub fn validate_create_card_accumulating_with_config(
    model: &CreateCardCommandModel,
    config: &ValidationConfig,
) -> ValidationResult<Card> {
    let issue = |card_number: CardNumber| {
        move |name: LetterString| {
            move |holder_id: UserId| {
                move |month: Month| {
                    move |year: Year| Card::issue(card_number, name, holder_id, (month, year))
                }
            }
        }
    };

    let result = ValidationResult::valid(issue)
        .apply(CardNumber::create(fields::CARD_NUMBER, &model.card_number))
        .apply(LetterString::create(fields::NAME, &model.name))
        .apply(holder_id(model))
        .apply(Month::create(fields::EXPIRATION_MONTH, model.expiration_month))
        .apply(Year::create_within(
            fields::EXPIRATION_YEAR,
            model.expiration_year,
            config.year_window,
        ));
    log_outcome("createCard", &result);
    result
}

fn holder_id(model: &CreateCardCommandModel) -> ValidationResult<UserId> {
    ValidationResult::required(fields::HOLDER_ID, model.holder_id.map(UserId::new))
}
