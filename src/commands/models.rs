//! Raw command models as they arrive from the deserialization layer.
//!
//! Fields are plain scalars; absent references are `Option`s, never sentinel
//! values.

use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to activate a card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActivateCommandModel {
    /// User performing the request.
    pub user_id: Uuid,
    /// Raw card number.
    pub number: String,
}

/// Request to deactivate a card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DeactivateCommandModel {
    /// User performing the request.
    pub user_id: Uuid,
    /// Raw card number.
    pub number: String,
}

/// Request to change a card's daily limit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SetDailyLimitCommandModel {
    /// User performing the request.
    pub user_id: Uuid,
    /// Raw card number.
    pub number: String,
    /// Requested limit; non-positive means unlimited.
    pub limit: Decimal,
}

/// Request to pay with a card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProcessPaymentCommandModel {
    /// User performing the request.
    pub user_id: Uuid,
    /// Raw card number.
    pub number: String,
    /// Amount to charge.
    pub payment_amount: Decimal,
}

/// Request to add money to a card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TopUpCommandModel {
    /// User performing the request.
    pub user_id: Uuid,
    /// Raw card number.
    pub number: String,
    /// Amount to add.
    pub top_up_amount: Decimal,
}

/// Raw postal address.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreateAddressCommandModel {
    /// Country name.
    pub country: String,
    /// City name.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// First address line, free text.
    pub address_line1: String,
    /// Second address line, free text.
    pub address_line2: String,
}

/// Request to register a user.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreateUserCommandModel {
    /// User name.
    pub name: String,
    /// Address; required for a valid user.
    pub address: Option<CreateAddressCommandModel>,
}

/// Request to issue a card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreateCardCommandModel {
    /// Raw card number.
    pub card_number: String,
    /// Name printed on the card.
    pub name: String,
    /// Holder of the card; required for a valid card.
    pub holder_id: Option<Uuid>,
    /// Expiry month.
    pub expiration_month: u16,
    /// Expiry year.
    pub expiration_year: u16,
}
