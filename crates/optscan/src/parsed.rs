use crate::Anomaly;
use crate::ArgRequirement;
use crate::OptionDescriptor;

/// One option occurrence, as handed to the caller
///
/// Everything borrows from the scanned arguments and the descriptor table.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedOption<'a, Id> {
    /// Name as written, without `-`/`--` and without `=value`
    pub name: &'a str,
    /// Attached (`-xVALUE`, `--name=VALUE`) or separate (`-x VALUE`) value
    pub value: Option<&'a str>,
    /// `None` when the name is not in the descriptor table
    pub descriptor: Option<&'a OptionDescriptor<Id>>,
}

impl<'a, Id> ParsedOption<'a, Id> {
    /// Identity of the matched descriptor
    pub fn id(&self) -> Option<&'a Id> {
        self.descriptor.map(OptionDescriptor::id)
    }

    pub fn arg_requirement(&self) -> Option<ArgRequirement> {
        self.descriptor.map(OptionDescriptor::arg_requirement)
    }

    /// Classify what, if anything, is wrong with this occurrence
    pub fn anomaly(&self) -> Option<Anomaly<'a>> {
        let name = self.name;
        match (self.arg_requirement(), self.value) {
            (None, _) => Some(Anomaly::Unrecognized { name }),
            (Some(ArgRequirement::NoArgument), Some(value)) => {
                Some(Anomaly::UnexpectedValue { name, value })
            }
            (Some(ArgRequirement::Required), None) => Some(Anomaly::MissingValue { name }),
            _ => None,
        }
    }

    /// [`ParsedOption::anomaly`] as a `Result`, for use with `?`
    pub fn check(&self) -> Result<(), Anomaly<'a>> {
        match self.anomaly() {
            Some(anomaly) => Err(anomaly),
            None => Ok(()),
        }
    }
}

impl<Id> Clone for ParsedOption<'_, Id> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Id> Copy for ParsedOption<'_, Id> {}

/// A match, with the descriptor still referred to by position
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawOpt<'a> {
    pub(crate) name: &'a str,
    pub(crate) value: Option<&'a str>,
    pub(crate) index: Option<usize>,
}

impl<'a> RawOpt<'a> {
    /// # Panics
    ///
    /// If `index` does not point into `descriptors`
    pub(crate) fn resolve<Id>(
        self,
        descriptors: &'a [OptionDescriptor<Id>],
    ) -> ParsedOption<'a, Id> {
        let descriptor = self.index.map(|index| {
            assert!(
                index < descriptors.len(),
                "descriptor {index} is out of range for a table of {}",
                descriptors.len()
            );
            &descriptors[index]
        });
        ParsedOption {
            name: self.name,
            value: self.value,
            descriptor,
        }
    }
}
