//! Card account state.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{DailyLimit, Money, UserId};

/// Balance and spending limit of the account behind a card.
///
/// # Examples
///
/// ```
/// use card_management::domain::{AccountInfo, DailyLimit, Money, UserId};
///
/// let holder = UserId::generate();
/// let account = AccountInfo::default_for(holder);
///
/// assert_eq!(account.holder_id(), holder);
/// assert_eq!(account.balance(), Money::zero());
/// assert_eq!(account.daily_limit(), DailyLimit::UNLIMITED);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AccountInfo {
    holder_id: UserId,
    balance: Money,
    daily_limit: DailyLimit,
}

impl AccountInfo {
    /// The account every new card starts with: zero balance, no daily limit.
    #[must_use]
    pub const fn default_for(holder_id: UserId) -> Self {
        Self {
            holder_id,
            balance: Money::zero(),
            daily_limit: DailyLimit::UNLIMITED,
        }
    }

    /// Returns the holder id.
    #[must_use]
    pub const fn holder_id(&self) -> UserId {
        self.holder_id
    }

    /// Returns the balance.
    #[must_use]
    pub const fn balance(&self) -> Money {
        self.balance
    }

    /// Returns the daily limit.
    #[must_use]
    pub const fn daily_limit(&self) -> DailyLimit {
        self.daily_limit
    }
}

/// Whether a card can be used, and if so, its account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum AccountDetails {
    /// The card is usable.
    Active(AccountInfo),
    /// The card was deactivated.
    Deactivated,
}

impl AccountDetails {
    /// Returns true for [`AccountDetails::Active`].
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Returns the account of an active card.
    #[must_use]
    pub const fn account_info(&self) -> Option<&AccountInfo> {
        match self {
            Self::Active(info) => Some(info),
            Self::Deactivated => None,
        }
    }
}
