//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `ValidationResult<_>`
//! directly. [`TypeConstructor`] records the applied type (`Inner`) and lets a
//! trait name "the same constructor applied to `B`" (`WithType<B>`), which is
//! what [`Functor`](super::Functor), [`Applicative`](super::Applicative) and
//! [`Monad`](super::Monad) are written against.
//!
//! # Example
//!
//! ```rust
//! use card_management::typeclass::TypeConstructor;
//! use card_management::validation::ValidationResult;
//!
//! fn assert_inner<T: TypeConstructor<Inner = u16>>() {}
//! assert_inner::<ValidationResult<u16>>();
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: the type parameter the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldValidationError;
    use crate::validation::ValidationResult;

    #[test]
    fn validation_result_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<ValidationResult<String>>();
    }

    #[test]
    fn validation_result_with_type_keeps_the_constructor() {
        fn assert_with_type<A, B>()
        where
            ValidationResult<A>: TypeConstructor<Inner = A, WithType<B> = ValidationResult<B>>,
        {
        }

        assert_with_type::<u16, String>();
        assert_with_type::<String, FieldValidationError>();
    }
}
