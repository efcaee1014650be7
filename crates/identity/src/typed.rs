use std::{convert::Infallible, fmt, marker::PhantomData};

use crate::Component;

/// The identity as a [`Component`] for a fixed type `T`.
///
/// `IdentityOf<T>` is the neutral element of a component pipeline: placing it
/// before or after another component does not change that component's
/// results. Its error type is [`Infallible`], so a call is statically known to
/// succeed and the `Ok` can be unwrapped with an irrefutable pattern.
///
/// The type holds no `T`, so it is zero-sized, `Copy`, `Send`, and `Sync` for
/// every `T`.
///
/// # Example
///
/// ```
/// use twine_identity::{Component, IDENTITY};
///
/// let pass = IDENTITY.of::<Vec<u8>>();
/// let Ok(bytes) = pass.call(vec![1, 2, 3]);
/// assert_eq!(bytes, [1, 2, 3]);
/// ```
pub struct IdentityOf<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> IdentityOf<T> {
    /// Creates the identity component for `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Component for IdentityOf<T> {
    type Input = T;
    type Output = T;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input)
    }
}

// Manual impls so that none of them require bounds on `T`.

impl<T> Clone for IdentityOf<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IdentityOf<T> {}

impl<T> Default for IdentityOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for IdentityOf<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for IdentityOf<T> {}

impl<T> fmt::Debug for IdentityOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityOf<{}>", std::any::type_name::<T>())
    }
}
