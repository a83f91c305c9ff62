//! Address assembler, fail-fast and accumulating.

use super::fields;
use super::log_outcome;
use super::models::CreateAddressCommandModel;
use crate::domain::{Address, Country, LetterString, PostalCode};
use crate::validation::ValidationResult;

/// Validates an address, stopping at the first invalid field.
///
/// Fields are checked in the order country, city, postal code.
pub fn validate_address_fail_fast(model: &CreateAddressCommandModel) -> ValidationResult<Address> {
    let result = Country::create(fields::COUNTRY, &model.country).bind(|country| {
        LetterString::create(fields::CITY, &model.city).bind(|city| {
            PostalCode::create(fields::POSTAL_CODE, &model.postal_code).bind(|postal_code| {
                ValidationResult::valid(assemble(model, country, city, postal_code))
            })
        })
    });
    log_outcome("createAddress", &result);
    result
}

/// Validates an address, reporting every invalid field.
///
/// # Examples
///
/// ```
/// use card_management::commands::{CreateAddressCommandModel, validate_address_accumulating};
///
/// let model = CreateAddressCommandModel {
///     country: "Atlantis".to_string(),
///     city: "Sunken City".to_string(),
///     postal_code: "0".to_string(),
///     address_line1: String::new(),
///     address_line2: String::new(),
/// };
///
/// let errors = validate_address_accumulating(&model).into_result().unwrap_err();
/// assert_eq!(
///     errors.field_paths().collect::<Vec<_>>(),
///     vec!["country", "city", "postalCode"]
/// );
/// ```
pub fn validate_address_accumulating(
    model: &CreateAddressCommandModel,
) -> ValidationResult<Address> {
    let result = Country::create(fields::COUNTRY, &model.country).map3(
        LetterString::create(fields::CITY, &model.city),
        PostalCode::create(fields::POSTAL_CODE, &model.postal_code),
        |country, city, postal_code| assemble(model, country, city, postal_code),
    );
    log_outcome("createAddress", &result);
    result
}

fn assemble(
    model: &CreateAddressCommandModel,
    country: Country,
    city: LetterString,
    postal_code: PostalCode,
) -> Address {
    Address::from_parts(
        country,
        city,
        postal_code,
        model.address_line1.clone(),
        model.address_line2.clone(),
    )
}
