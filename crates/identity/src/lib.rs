//! The identity transform for the Twine framework.
//!
//! This crate provides the neutral element for composing Twine transforms:
//!
//! - [`identity()`] — returns its argument unchanged
//! - [`Identity`] and [`IDENTITY`] — the same operation as a shared, stateless value
//! - [`IdentityOf`] — the identity as an infallible [`Component`]
//! - [`Component`] — a callable that maps a typed input to a typed output
//!
//! The identity preserves how a value is passed. A `&mut T` comes back as the
//! same `&mut T`, a `&T` as the same `&T`, and an owned `T` is moved through
//! without being cloned. The identity entry points are `const fn`s and none
//! of them can fail.

mod component;
mod identity;
mod typed;

pub use component::Component;
pub use identity::{IDENTITY, Identity, identity};
pub use typed::IdentityOf;
