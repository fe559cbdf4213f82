//! The [`base`](self) module contains [`Base`], a description of the type a
//! typed mock stands in for.

use std::collections::BTreeMap;

use convert_case::{Case, Casing};

use crate::Error;

/// Kind of a member declared by a [`Base`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Member {
    /// A callable member.
    Method,

    /// A plain data member.
    Attribute,
}

/// Named set of members a typed [`Mock`](crate::Mock) is limited to.
///
/// ```
/// use funk::Base;
///
/// let storage = Base::new("Storage").method("read");
/// let file = Base::new("FileStorage")
///     .method("write")
///     .attribute("path")
///     .extends(&storage);
///
/// assert!(file.check_method("read").is_ok());
/// assert!(file.check_method("path").is_err());
/// assert_eq!("file_storage", file.default_mock_name());
/// ```
#[derive(Debug, Clone)]
pub struct Base {
    name: String,
    members: BTreeMap<String, Member>,
}

impl Base {
    /// Create a new base type named `name` without any members.
    #[must_use]
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            members: BTreeMap::new(),
        }
    }

    /// Declare the method `name`.
    #[must_use]
    pub fn method<N: Into<String>>(mut self, name: N) -> Self {
        self.members.insert(name.into(), Member::Method);

        self
    }

    /// Declare the data attribute `name`.
    #[must_use]
    pub fn attribute<N: Into<String>>(mut self, name: N) -> Self {
        self.members.insert(name.into(), Member::Attribute);

        self
    }

    /// Inherit all members of `parent` that are not declared by `self`.
    #[must_use]
    pub fn extends(mut self, parent: &Base) -> Self {
        for (name, member) in &parent.members {
            self.members.entry(name.clone()).or_insert(*member);
        }

        self
    }

    /// Name of the base type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the member `name`, if declared.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<Member> {
        self.members.get(name).copied()
    }

    /// Check that `name` is a method of this base type.
    ///
    /// # Errors
    /// - [`Error::UndefinedMethod`] if the member is not declared
    /// - [`Error::NotCallable`] if the member is a data attribute
    pub fn check_method(&self, name: &str) -> Result<(), Error> {
        match self.member(name) {
            Some(Member::Method) => Ok(()),
            Some(Member::Attribute) => Err(Error::NotCallable {
                base: self.name.clone(),
                method: name.into(),
            }),
            None => Err(Error::UndefinedMethod {
                base: self.name.clone(),
                method: name.into(),
            }),
        }
    }

    /// Name of a mock of this type if no explicit name was passed.
    #[must_use]
    pub fn default_mock_name(&self) -> String {
        self.name.to_case(Case::Snake)
    }
}
