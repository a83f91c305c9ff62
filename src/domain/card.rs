//! Card aggregate.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{AccountDetails, AccountInfo, CardNumber, LetterString, Month, UserId, Year};

/// A validated payment card.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Card {
    card_number: CardNumber,
    name: LetterString,
    holder_id: UserId,
    expiration: (Month, Year),
    account_details: AccountDetails,
}

impl Card {
    /// Assembles a freshly issued card; it starts active with a default account.
    pub(crate) const fn issue(
        card_number: CardNumber,
        name: LetterString,
        holder_id: UserId,
        expiration: (Month, Year),
    ) -> Self {
        Self {
            card_number,
            name,
            holder_id,
            expiration,
            account_details: AccountDetails::Active(AccountInfo::default_for(holder_id)),
        }
    }

    /// Returns the card number.
    #[must_use]
    pub const fn card_number(&self) -> &CardNumber {
        &self.card_number
    }

    /// Returns the name printed on the card.
    #[must_use]
    pub const fn name(&self) -> &LetterString {
        &self.name
    }

    /// Returns the holder id.
    #[must_use]
    pub const fn holder_id(&self) -> UserId {
        self.holder_id
    }

    /// Returns the expiry month and year.
    #[must_use]
    pub const fn expiration(&self) -> (Month, Year) {
        self.expiration
    }

    /// Returns the account details.
    #[must_use]
    pub const fn account_details(&self) -> &AccountDetails {
        &self.account_details
    }
}
