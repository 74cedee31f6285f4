use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    ptr::NonNull,
    rc::{self, Rc},
    sync::{self, mpsc, Arc},
};

/// Types that may or may not hold a "nil" reference.
///
/// Whether a value can be nil at all is a property of its type, so this is
/// a capability trait rather than a runtime inspection: [`Option`] is nil
/// when it's `None`, raw pointers are nil when they're null, and weak
/// pointers are nil once they can no longer be upgraded. Plain values
/// (numbers, strings, collections, smart pointers) implement it as well, but
/// are never nil. Notably, an empty `Vec` or `HashMap` is *not* nil; only an
/// absent one (`None`) is.
///
/// Implement this for your own types if you want to pass them to
/// [`nil`][crate::nil()] or [`not_nil`][crate::not_nil].
///
/// ```
/// use assertive::Nullable;
///
/// let absent: Option<Vec<i32>> = None;
/// assert!(absent.is_nil());
/// assert!(!Some(Vec::<i32>::new()).is_nil());
/// assert!(!Vec::<i32>::new().is_nil());
/// assert!(!10i32.is_nil());
/// ```
pub trait Nullable {
    /// Returns true if this value is the zero reference for its category.
    fn is_nil(&self) -> bool;
}

/// Check if `value` is nil. See [`Nullable`].
#[inline]
pub fn is_nil<T: Nullable + ?Sized>(value: &T) -> bool {
    value.is_nil()
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for rc::Weak<T> {
    fn is_nil(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T: ?Sized> Nullable for sync::Weak<T> {
    fn is_nil(&self) -> bool {
        self.strong_count() == 0
    }
}

/// Implement `Nullable` for types that can never hold a nil reference
macro_rules! never_nil {
    ($($type:ty),+ $(,)?) => {$(
        impl Nullable for $type {
            #[inline]
            fn is_nil(&self) -> bool {
                false
            }
        }
    )+};
}

/// Like `never_nil!`, for generic types
macro_rules! never_nil_generic {
    ($(<$($param:ident $(: ?$sized:ident)?),+> $type:ty;)+) => {$(
        impl<$($param $(: ?$sized)?),+> Nullable for $type {
            #[inline]
            fn is_nil(&self) -> bool {
                false
            }
        }
    )+};
}

never_nil! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    bool, char, (), str, String,
}

never_nil_generic! {
    <T> Vec<T>;
    <T> [T];
    <T> VecDeque<T>;
    <K, V> HashMap<K, V>;
    <K, V> BTreeMap<K, V>;
    <T> HashSet<T>;
    <T> BTreeSet<T>;
    <T: ?Sized> Box<T>;
    <T: ?Sized> Rc<T>;
    <T: ?Sized> Arc<T>;
    <T: ?Sized> NonNull<T>;
    <T> mpsc::Sender<T>;
    <T> mpsc::SyncSender<T>;
    <T> mpsc::Receiver<T>;
}

impl<T, const N: usize> Nullable for [T; N] {
    #[inline]
    fn is_nil(&self) -> bool {
        false
    }
}
