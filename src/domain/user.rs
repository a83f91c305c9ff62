//! User aggregate.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{Address, LetterString, UserId};

/// A validated user with a mandatory address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UserInfo {
    id: UserId,
    name: LetterString,
    address: Address,
}

impl UserInfo {
    pub(crate) const fn from_parts(id: UserId, name: LetterString, address: Address) -> Self {
        Self { id, name, address }
    }

    /// Returns the user id.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user name.
    #[must_use]
    pub const fn name(&self) -> &LetterString {
        &self.name
    }

    /// Returns the address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }
}
