//! Validated commands handed to the use-case layer.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::domain::{CardNumber, DailyLimit, MoneyTransaction, UserId};

/// Validated request to activate a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ActivateCommand {
    /// User performing the request.
    pub user_id: UserId,
    /// Card to activate.
    pub card_number: CardNumber,
}

/// Validated request to deactivate a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DeactivateCommand {
    /// User performing the request.
    pub user_id: UserId,
    /// Card to deactivate.
    pub card_number: CardNumber,
}

/// Validated request to change a daily limit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SetDailyLimitCommand {
    /// User performing the request.
    pub user_id: UserId,
    /// Card whose limit changes.
    pub card_number: CardNumber,
    /// New limit.
    pub limit: DailyLimit,
}

/// Validated request to pay with a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProcessPaymentCommand {
    /// User performing the request.
    pub user_id: UserId,
    /// Card to charge.
    pub card_number: CardNumber,
    /// Amount to charge.
    pub payment_amount: MoneyTransaction,
}

/// Validated request to add money to a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TopUpCommand {
    /// User performing the request.
    pub user_id: UserId,
    /// Card to credit.
    pub card_number: CardNumber,
    /// Amount to add.
    pub top_up_amount: MoneyTransaction,
}
