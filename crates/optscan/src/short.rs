use crate::descriptor::find_short;
use crate::parsed::RawOpt;
use crate::queue::ArgQueue;
use crate::ArgRequirement;
use crate::OptionDescriptor;

const PREFIX: char = '-';

/// The not-yet-expanded characters of a `-xyz` argument
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ShortCluster<'a> {
    rest: &'a str,
}

impl<'a> ShortCluster<'a> {
    /// Consume a `-xyz` argument from the front of `queue`
    ///
    /// `-` and `--` are left in place.
    pub(crate) fn accept<S: AsRef<str>>(queue: &mut ArgQueue<'a, S>) -> Option<Self> {
        let rest = drop_prefix(queue.peek()?)?;
        queue.pop(); // accept
        Some(Self { rest })
    }

    /// Expand the next character into an occurrence
    ///
    /// Once an option that takes a value is found, the remainder of the argument becomes its
    /// value.  With nothing remaining, only [`ArgRequirement::Required`] reaches for the next
    /// argument in `queue`.
    pub(crate) fn next_opt<S: AsRef<str>, Id>(
        &mut self,
        queue: &mut ArgQueue<'a, S>,
        descriptors: &[OptionDescriptor<Id>],
    ) -> Option<RawOpt<'a>> {
        let c = self.rest.chars().next()?;
        let (name, trailing) = self.rest.split_at(c.len_utf8());
        self.rest = trailing;

        let Some(index) = find_short(descriptors, c) else {
            return Some(RawOpt {
                name,
                value: None,
                index: None,
            });
        };
        let value = match descriptors[index].arg_requirement() {
            ArgRequirement::NoArgument => None,
            ArgRequirement::Required | ArgRequirement::Optional if !self.rest.is_empty() => {
                Some(std::mem::take(&mut self.rest))
            }
            ArgRequirement::Required => queue.pop(),
            ArgRequirement::Optional => None,
        };
        Some(RawOpt {
            name,
            value,
            index: Some(index),
        })
    }
}

fn drop_prefix(arg: &str) -> Option<&str> {
    let rest = arg.strip_prefix(PREFIX)?;
    if rest.is_empty() || rest.starts_with(PREFIX) {
        return None;
    }
    Some(rest)
}
