//! The [`value`](self) module defines the dynamically typed [`Value`] that is
//! passed to and returned from invocations of a mock.

use std::any::{type_name, Any, TypeId};
use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use once_cell::sync::Lazy;

/// Type that can be stored inside a [`Value`].
///
/// Use [`impl_object!`](crate::impl_object) to implement this trait for any
/// type that implements [`Debug`] and [`PartialEq`]. Implement it manually to
/// expose attributes (see [`has_attr!`](crate::has_attr)) or elements (see
/// [`contains_exactly!`](crate::contains_exactly)).
pub trait Object: Any + Debug + Send + Sync {
    /// Returns `true` if `other` is equal to `self`.
    fn equals(&self, other: &dyn Object) -> bool;

    /// Name of the type of this object.
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }

    /// Get the value of the attribute `name`, if the object has one.
    fn attr(&self, _name: &str) -> Option<Value> {
        None
    }

    /// Get the elements of the object, if it is iterable.
    fn elements(&self) -> Option<Vec<Value>> {
        None
    }

    /// Address that identifies the object. Two values are the same if their
    /// identities are equal.
    fn identity(&self) -> *const () {
        (self as *const Self).cast()
    }
}

/// Compare `this` with `other` using [`PartialEq`], if `other` is a `T`.
pub fn equals<T>(this: &T, other: &dyn Object) -> bool
where
    T: PartialEq + 'static,
{
    (other as &dyn Any)
        .downcast_ref::<T>()
        .is_some_and(|other| this == other)
}

/// Implements [`Object`] for the passed types using their [`PartialEq`]
/// implementation.
#[macro_export]
macro_rules! impl_object {
    ($( $type:ty ),+ $(,)?) => {
        $(
            impl $crate::Object for $type {
                fn equals(&self, other: &dyn $crate::Object) -> bool {
                    $crate::value::equals(self, other)
                }
            }
        )+
    };
}

impl_object!((), bool, char, String);
impl_object!(i8, i16, i32, i64, i128, isize);
impl_object!(u8, u16, u32, u64, u128, usize);
impl_object!(f32, f64);

impl<T> Object for Vec<T>
where
    T: Object + Clone + PartialEq,
{
    fn equals(&self, other: &dyn Object) -> bool {
        equals(self, other)
    }

    fn elements(&self) -> Option<Vec<Value>> {
        Some(self.iter().cloned().map(Value::new).collect())
    }
}

impl Object for Vec<Value> {
    fn equals(&self, other: &dyn Object) -> bool {
        equals(self, other)
    }

    fn elements(&self) -> Option<Vec<Value>> {
        Some(self.clone())
    }
}

static NONE: Lazy<Value> = Lazy::new(|| Value::new(()));

/// Shared, dynamically typed value.
///
/// Cloning a value is cheap and keeps its identity (see [`Value::is_same`]).
#[derive(Clone)]
pub struct Value(Arc<dyn Object>);

impl Value {
    /// Create a new [`Value`] from the passed `object`.
    pub fn new<T: Object>(object: T) -> Self {
        Self(Arc::new(object))
    }

    /// Get the value that is returned by calls without a configured result.
    ///
    /// There is only one none value: all returned values are the same.
    #[must_use]
    pub fn none() -> Self {
        NONE.clone()
    }

    /// Create a list value from the passed `items`.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::new(items.into_iter().map(Into::into).collect::<Vec<Value>>())
    }

    /// Returns `true` if this is the value returned by [`Value::none`].
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.is::<()>()
    }

    /// Returns `true` if the wrapped object is a `T`.
    #[must_use]
    pub fn is<T: Object>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Get a reference to the wrapped object, if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Get a copy of the wrapped object, if it is a `T`.
    #[must_use]
    pub fn get<T: Object + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// Returns `true` if `self` and `other` are the same object, not just
    /// equal ones.
    #[must_use]
    pub fn is_same(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.identity() == other.0.identity()
    }

    /// Name of the type of the wrapped object.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// [`TypeId`] of the wrapped object.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.as_any().type_id()
    }

    /// Get the attribute `name` of the wrapped object.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<Value> {
        self.0.attr(name)
    }

    /// Get the elements of the wrapped object, if it is iterable.
    #[must_use]
    pub fn elements(&self) -> Option<Vec<Value>> {
        self.0.elements()
    }

    fn as_any(&self) -> &dyn Any {
        &*self.0
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: Object> From<T> for Value {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::new(value.to_owned())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0.equals(&*other.0)
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&*self.0, f)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&*self.0, f)
    }
}

/// Plain value object with named attributes.
///
/// Useful as return value of a mocked method, e.g. for responses that are only
/// inspected through their attributes.
#[derive(Default, Clone, PartialEq)]
pub struct Data {
    attrs: BTreeMap<String, Value>,
}

impl Data {
    /// Create a new empty [`Data`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the attribute `name` with the passed `value`.
    #[must_use]
    pub fn with<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.set(name, value);

        self
    }

    /// Set the attribute `name` to the passed `value`.
    pub fn set<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.attrs.insert(name.into(), value.into());
    }

    /// Get the value of the attribute `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }
}

impl<K, V> FromIterator<(K, V)> for Data
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (name, value) in iter {
            data.set(name, value);
        }

        data
    }
}

impl Debug for Data {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let attrs = self
            .attrs
            .iter()
            .map(|(name, value)| format!("{name}={value:?}"))
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "Data({attrs})")
    }
}

impl Object for Data {
    fn equals(&self, other: &dyn Object) -> bool {
        equals(self, other)
    }

    fn attr(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}
