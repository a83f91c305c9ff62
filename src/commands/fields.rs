//! Field paths reported in validation errors.

/// Card number of any card command.
pub const CARD_NUMBER: &str = "cardNumber";
/// Card holder or user name.
pub const NAME: &str = "name";
/// Holder of a new card.
pub const HOLDER_ID: &str = "holderId";
/// Card expiry month.
pub const EXPIRATION_MONTH: &str = "expirationMonth";
/// Card expiry year.
pub const EXPIRATION_YEAR: &str = "expirationYear";
/// User address; nested address fields are reported as `address.<field>`.
pub const ADDRESS: &str = "address";
/// Address country.
pub const COUNTRY: &str = "country";
/// Address city.
pub const CITY: &str = "city";
/// Address postal code.
pub const POSTAL_CODE: &str = "postalCode";
/// Payment amount.
pub const PAYMENT_AMOUNT: &str = "paymentAmount";
/// Top-up amount.
pub const TOP_UP_AMOUNT: &str = "topUpAmount";
/// Daily spending limit.
pub const LIMIT: &str = "limit";
