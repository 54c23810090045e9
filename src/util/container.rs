//! Container helpers
//!
//! Small eager functions over slices and maps. Lookups return owned clones so
//! results can outlive the container borrow.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// First element of `items`, if any.
pub fn head<T: Clone>(items: &[T]) -> Option<T> {
    items.first().cloned()
}

/// Last element of `items`, if any.
pub fn tail<T: Clone>(items: &[T]) -> Option<T> {
    items.last().cloned()
}

/// Maps that can be queried by key.
pub trait Mapping {
    /// Stored key type.
    type Key;
    /// Stored value type.
    type Value;

    /// Borrow the value stored under `key`.
    fn get_value<Q>(&self, key: &Q) -> Option<&Self::Value>
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Ord + ?Sized;
}

impl<K: Hash + Eq, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn get_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.get(key)
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn get_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.get(key)
    }
}

/// Value stored under `key`, cloned out of the map.
pub fn lookup<M, Q>(map: &M, key: &Q) -> Option<M::Value>
where
    M: Mapping,
    M::Key: Borrow<Q>,
    M::Value: Clone,
    Q: Hash + Ord + ?Sized,
{
    map.get_value(key).cloned()
}

/// Index of the first element equal to `needle`.
pub fn find<T: PartialEq>(items: &[T], needle: &T) -> Option<usize> {
    items.iter().position(|item| item == needle)
}

/// True if at least one element equals `needle`.
pub fn contains<T: PartialEq>(items: &[T], needle: &T) -> bool {
    find(items, needle).is_some()
}

/// Partially applied [`contains`]: fixes the needle, takes the slice later.
pub fn contains_fn<T: PartialEq>(needle: T) -> impl Fn(&[T]) -> bool {
    move |items: &[T]| contains(items, &needle)
}

/// Left fold of `items` with `func`, starting from `initial`.
pub fn reduce<I, U, F>(func: F, initial: U, items: I) -> U
where
    I: IntoIterator,
    F: FnMut(U, I::Item) -> U,
{
    items.into_iter().fold(initial, func)
}

/// Partially applied [`reduce`]: fixes only the function. The initial value
/// and the items are supplied per call.
pub fn reduce_fn<T, U, F>(func: F) -> impl Fn(U, &[T]) -> U
where
    T: Clone,
    F: Fn(U, T) -> U,
{
    move |initial: U, items: &[T]| reduce(&func, initial, items.iter().cloned())
}

/// Partially applied [`reduce`]: fixes the function and the initial value.
pub fn reducer<T, U, F>(func: F, initial: U) -> impl Fn(&[T]) -> U
where
    T: Clone,
    U: Clone,
    F: Fn(U, T) -> U,
{
    move |items: &[T]| reduce(&func, initial.clone(), items.iter().cloned())
}
