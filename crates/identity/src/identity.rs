use crate::IdentityOf;

/// Returns `value` unchanged.
///
/// The argument can be owned, borrowed, or mutably borrowed, and the result
/// has the same form:
///
/// - `identity(&mut x)` returns a `&mut` that aliases `x`.
/// - `identity(&x)` returns a `&` that aliases `x`.
/// - `identity(x)` moves `x` into the result. Moves never fail and never
///   call [`Clone::clone`], so heap buffers are kept as they are.
///
/// Array literals have a type of their own, so lists need no special
/// treatment: `identity([1, 2, 3])` returns `[1, 2, 3]`.
///
/// # Example
///
/// ```
/// use twine_identity::identity;
///
/// assert_eq!(identity(5), 5);
///
/// let mut numbers = vec![1, 2];
/// identity(&mut numbers).push(3);
/// assert_eq!(numbers, [1, 2, 3]);
///
/// let kept: Vec<_> = [Some(1), None, Some(3)].into_iter().flat_map(identity).collect();
/// assert_eq!(kept, [1, 3]);
/// ```
#[inline]
#[must_use]
pub const fn identity<T>(value: T) -> T {
    value
}

/// The identity transform as a value.
///
/// `Identity` holds no data, so a single shared instance ([`IDENTITY`]) can be
/// used from any call site or thread. Use it where a transform must be stored
/// or passed around, and [`identity`] where a function is enough.
///
/// # Example
///
/// ```
/// use twine_identity::IDENTITY;
///
/// let mut values = [3, 1, 2];
/// IDENTITY.by_mut(&mut values[..]).sort();
/// assert_eq!(values, [1, 2, 3]);
///
/// assert_eq!(IDENTITY.by_ref("abc"), "abc");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity;

/// The shared [`Identity`] instance.
pub const IDENTITY: Identity = Identity;

impl Identity {
    /// Returns `value` unchanged.
    ///
    /// Works for owned values and for references alike; see [`identity`].
    #[inline]
    #[must_use]
    pub const fn call<T>(&self, value: T) -> T {
        value
    }

    /// Returns the shared reference it is given.
    ///
    /// Unlike [`Identity::call`], this accepts unsized targets such as `str`,
    /// slices, and trait objects.
    #[inline]
    #[must_use]
    pub const fn by_ref<'a, T: ?Sized>(&self, value: &'a T) -> &'a T {
        value
    }

    /// Returns the mutable reference it is given.
    ///
    /// Writes through the result are writes to the original storage.
    #[inline]
    #[must_use]
    pub const fn by_mut<'a, T: ?Sized>(&self, value: &'a mut T) -> &'a mut T {
        value
    }

    /// Moves `value` through unchanged.
    #[inline]
    #[must_use]
    pub const fn by_value<T>(&self, value: T) -> T {
        value
    }

    /// Returns the identity for `T` as a function pointer.
    ///
    /// Useful for APIs that store a `fn(T) -> T` or need a nameable type.
    #[inline]
    #[must_use]
    pub const fn as_fn<T>(&self) -> fn(T) -> T {
        identity::<T>
    }

    /// Returns the identity for `T` as a [`Component`](crate::Component).
    #[inline]
    #[must_use]
    pub const fn of<T>(&self) -> IdentityOf<T> {
        IdentityOf::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{collections::HashMap, mem, ptr};

    use approx::assert_relative_eq;

    /// A value whose clone panics, so any hidden copy is caught.
    #[derive(Debug, PartialEq)]
    struct NoClone(u8);

    impl Clone for NoClone {
        fn clone(&self) -> Self {
            panic!("NoClone was cloned");
        }
    }

    const SEVEN: i32 = identity(7);
    const LIST: [u8; 3] = IDENTITY.call([1, 2, 3]);
    const NAME: &str = IDENTITY.by_ref("twine");

    #[test]
    fn returns_scalars_unchanged() {
        assert_eq!(identity(5), 5);
        assert_eq!(identity('x'), 'x');
        assert!(identity(true));
        assert_eq!(IDENTITY.call(-12_i64), -12);
    }

    #[test]
    fn floats_keep_their_bits() {
        assert_relative_eq!(identity(0.1 + 0.2), 0.3, epsilon = 1e-15);
        assert!(identity(f64::NAN).is_nan());
        assert_eq!(identity(-0.0_f64).to_bits(), (-0.0_f64).to_bits());
    }

    #[test]
    fn shared_reference_aliases_input() {
        let text = String::from("abc");
        let out = identity(&text);

        assert!(ptr::eq(out, &text));
        assert_eq!(out, "abc");
    }

    #[test]
    fn mutable_reference_aliases_input() {
        let mut list = vec![1, 2];

        let out = identity(&mut list);
        out.push(3);
        assert_eq!(list, [1, 2, 3]);

        list.push(4);
        let out = IDENTITY.by_mut(&mut list);
        assert_eq!(out, &[1, 2, 3, 4]);
    }

    #[test]
    fn owned_value_is_moved_not_copied() {
        let list = vec![10, 20, 30];
        let buffer = list.as_ptr();

        let out = identity(list);

        assert_eq!(out.as_ptr(), buffer);
        assert_eq!(out, [10, 20, 30]);
    }

    #[test]
    fn never_clones() {
        assert_eq!(identity(NoClone(1)), NoClone(1));
        assert_eq!(IDENTITY.by_value(NoClone(2)), NoClone(2));

        let mut value = NoClone(3);
        IDENTITY.by_mut(&mut value).0 = 4;
        assert_eq!(*IDENTITY.by_ref(&value), NoClone(4));
    }

    #[test]
    fn array_literals_in_every_mode() {
        assert_eq!(identity([1, 2, 3]), [1, 2, 3]);
        assert_eq!(identity(&[1, 2, 3]), &[1, 2, 3]);

        let mut list = [1, 2];
        identity(&mut list)[1] = 5;
        assert_eq!(list, [1, 5]);

        let empty: [u8; 0] = identity([]);
        assert!(empty.is_empty());
    }

    #[test]
    fn unsized_targets_by_reference() {
        let mut values = [3, 1, 2];
        IDENTITY.by_mut(&mut values[..]).sort_unstable();
        assert_eq!(values, [1, 2, 3]);

        let slice: &[i32] = IDENTITY.by_ref(&values[1..]);
        assert_eq!(slice, [2, 3]);

        let add_one: &dyn Fn(i32) -> i32 = &|x| x + 1;
        assert_eq!(IDENTITY.by_ref(add_one)(1), 2);
    }

    #[test]
    fn fallible_values_pass_through() {
        let parsed: Result<i32, _> = "nope".parse::<i32>();
        let expected = parsed.clone();
        assert_eq!(identity(parsed), expected);

        assert_eq!(identity(None::<u8>), None);
    }

    #[test]
    fn usable_in_const_context() {
        assert_eq!(SEVEN, 7);
        assert_eq!(LIST, [1, 2, 3]);
        assert_eq!(NAME, "twine");
    }

    #[test]
    fn usable_as_function_argument() {
        let doubled: Vec<i32> = [1, 2, 3].iter().map(|x| x * 2).map(identity).collect();
        assert_eq!(doubled, [2, 4, 6]);

        let as_fn: fn(String) -> String = IDENTITY.as_fn();
        assert_eq!(as_fn("same".to_owned()), "same");

        let index: HashMap<_, _> = ["a", "b"]
            .into_iter()
            .enumerate()
            .map(|(i, key)| (IDENTITY.call(key), i))
            .collect();
        assert_eq!(index["b"], 1);
    }

    #[test]
    fn identity_is_zero_sized() {
        assert_eq!(mem::size_of::<Identity>(), 0);
        assert_eq!(IDENTITY, Identity);
        assert_eq!(Identity::default(), IDENTITY);
    }
}
