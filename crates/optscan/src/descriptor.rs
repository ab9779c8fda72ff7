use std::borrow::Cow;

/// Whether an option takes a value
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ArgRequirement {
    /// `-x`, `--name`
    NoArgument,
    /// `-xVALUE`, `-x VALUE`, `--name=VALUE`, `--name VALUE`
    Required,
    /// `-xVALUE`, `--name=VALUE`
    ///
    /// An optional value is never taken from the following argument.
    Optional,
}

/// Binds a caller-defined identity to the names it may be spelled with
///
/// Descriptors are looked up in order; when two share a name, the first one wins.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub struct OptionDescriptor<Id> {
    id: Id,
    #[cfg_attr(feature = "serde", serde(default))]
    short: Option<char>,
    #[cfg_attr(feature = "serde", serde(default))]
    long: Option<Cow<'static, str>>,
    #[cfg_attr(feature = "serde", serde(rename = "arg"))]
    arg_requirement: ArgRequirement,
}

impl<Id> OptionDescriptor<Id> {
    pub const fn new(
        id: Id,
        short: Option<char>,
        long: Option<&'static str>,
        arg_requirement: ArgRequirement,
    ) -> Self {
        let long = match long {
            Some(long) => Some(Cow::Borrowed(long)),
            None => None,
        };
        Self {
            id,
            short,
            long,
            arg_requirement,
        }
    }

    /// Only spelled as `-c`
    pub const fn short(id: Id, short: char, arg_requirement: ArgRequirement) -> Self {
        Self::new(id, Some(short), None, arg_requirement)
    }

    /// Only spelled as `--long`
    pub const fn long(id: Id, long: &'static str, arg_requirement: ArgRequirement) -> Self {
        Self::new(id, None, Some(long), arg_requirement)
    }

    /// Spelled as either `-c` or `--long`
    pub const fn both(
        id: Id,
        short: char,
        long: &'static str,
        arg_requirement: ArgRequirement,
    ) -> Self {
        Self::new(id, Some(short), Some(long), arg_requirement)
    }

    /// Replace the long name with one built at runtime
    pub fn with_long(mut self, long: impl Into<Cow<'static, str>>) -> Self {
        self.long = Some(long.into());
        self
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn arg_requirement(&self) -> ArgRequirement {
        self.arg_requirement
    }
}

pub(crate) fn find_long<Id>(descriptors: &[OptionDescriptor<Id>], name: &str) -> Option<usize> {
    descriptors
        .iter()
        .position(|descriptor| descriptor.long_name() == Some(name))
}

pub(crate) fn find_short<Id>(descriptors: &[OptionDescriptor<Id>], name: char) -> Option<usize> {
    descriptors
        .iter()
        .position(|descriptor| descriptor.short_name() == Some(name))
}
