//! Domain primitives and aggregates.
//!
//! Every type here is immutable and can only be produced by its smart
//! constructor (or, for aggregates, by the assemblers in
//! [`crate::commands`]), so holding a value is proof that its invariant holds.
//!
//! # Primitives
//!
//! - [`CardNumber`]: 16 digits, whitespace-insensitive
//! - [`Month`], [`Year`]: card expiry
//! - [`Money`], [`MoneyTransaction`], [`DailyLimit`]: amounts
//! - [`LetterString`], [`PostalCode`]: constrained text
//! - [`Country`]: closed enumeration
//! - [`UserId`]: user identifier
//!
//! # Aggregates
//!
//! - [`Address`], [`UserInfo`], [`AccountInfo`], [`AccountDetails`], [`Card`]

pub mod constrained_type;

mod account;
mod address;
mod card;
mod card_number;
mod country;
mod expiration;
mod identifiers;
mod money;
mod text;
mod user;

pub use account::{AccountDetails, AccountInfo};
pub use address::Address;
pub use card::Card;
pub use card_number::{CARD_NUMBER_LENGTH, CardNumber};
pub use country::Country;
pub use expiration::{Month, Year};
pub use identifiers::UserId;
pub use money::{DailyLimit, Money, MoneyTransaction};
pub use text::{LetterString, PostalCode};
pub use user::UserInfo;

static_assertions::assert_impl_all!(Card: Send, Sync, Clone);
static_assertions::assert_impl_all!(UserInfo: Send, Sync, Clone);
