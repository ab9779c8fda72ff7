use crate::descriptor::find_long;
use crate::parsed::RawOpt;
use crate::queue::ArgQueue;
use crate::ArgRequirement;
use crate::OptionDescriptor;

const PREFIX: &str = "--";
const SEPARATOR: char = '=';

/// Consume a `--name` or `--name=value` argument from the front of `queue`
///
/// A separate value is only taken for a recognized [`ArgRequirement::Required`] option, and is
/// taken even when it looks like an option itself.  An `=value` is always kept, recognized or not.
pub(crate) fn match_long<'a, S: AsRef<str>, Id>(
    queue: &mut ArgQueue<'a, S>,
    descriptors: &[OptionDescriptor<Id>],
) -> Option<RawOpt<'a>> {
    let opt_string = drop_prefix(queue.peek()?)?;
    queue.pop(); // accept

    let opt = if let Some((name, value)) = opt_string.split_once(SEPARATOR) {
        RawOpt {
            name,
            value: Some(value),
            index: find_long(descriptors, name),
        }
    } else {
        let index = find_long(descriptors, opt_string);
        let value = match index.map(|index| descriptors[index].arg_requirement()) {
            Some(ArgRequirement::Required) => queue.pop(),
            Some(ArgRequirement::NoArgument | ArgRequirement::Optional) | None => None,
        };
        RawOpt {
            name: opt_string,
            value,
            index,
        }
    };
    Some(opt)
}

/// `--` on its own is the end-of-options marker, not a long option
fn drop_prefix(arg: &str) -> Option<&str> {
    arg.strip_prefix(PREFIX).filter(|rest| !rest.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;

    const DESCRIPTORS: &[OptionDescriptor<u8>] = &[
        OptionDescriptor::both(0, 'a', "aaa", ArgRequirement::NoArgument),
        OptionDescriptor::both(1, 'b', "bbb", ArgRequirement::Required),
        OptionDescriptor::both(2, 'c', "ccc", ArgRequirement::Optional),
    ];

    fn parse<'a>(args: &'a [&'a str]) -> (Option<RawOpt<'a>>, &'a [&'a str]) {
        let mut queue = ArgQueue::new(args);
        let opt = match_long(&mut queue, DESCRIPTORS);
        (opt, queue.remaining())
    }

    #[test]
    fn flag() {
        assert_eq!(
            parse(&["--aaa", "next"]),
            (
                Some(RawOpt {
                    name: "aaa",
                    value: None,
                    index: Some(0)
                }),
                &["next"][..]
            )
        );
    }

    #[test]
    fn attached_value() {
        assert_eq!(
            parse(&["--bbb=x=y", "next"]),
            (
                Some(RawOpt {
                    name: "bbb",
                    value: Some("x=y"),
                    index: Some(1)
                }),
                &["next"][..]
            )
        );
        assert_eq!(
            parse(&["--bbb="]).0,
            Some(RawOpt {
                name: "bbb",
                value: Some(""),
                index: Some(1)
            })
        );
    }

    #[test]
    fn separate_value_is_taken_verbatim() {
        assert_eq!(
            parse(&["--bbb", "--aaa", "next"]),
            (
                Some(RawOpt {
                    name: "bbb",
                    value: Some("--aaa"),
                    index: Some(1)
                }),
                &["next"][..]
            )
        );
    }

    #[test]
    fn separate_value_missing() {
        assert_eq!(
            parse(&["--bbb"]),
            (
                Some(RawOpt {
                    name: "bbb",
                    value: None,
                    index: Some(1)
                }),
                &[][..]
            )
        );
    }

    #[test]
    fn optional_value_stays_in_its_argument() {
        assert_eq!(
            parse(&["--ccc", "next"]),
            (
                Some(RawOpt {
                    name: "ccc",
                    value: None,
                    index: Some(2)
                }),
                &["next"][..]
            )
        );
        assert_eq!(
            parse(&["--ccc=v"]).0,
            Some(RawOpt {
                name: "ccc",
                value: Some("v"),
                index: Some(2)
            })
        );
    }

    #[test]
    fn unrecognized_keeps_attached_value() {
        assert_eq!(
            parse(&["--xyz=val"]).0,
            Some(RawOpt {
                name: "xyz",
                value: Some("val"),
                index: None
            })
        );
    }

    #[test]
    fn unrecognized_never_takes_separate_value() {
        assert_eq!(
            parse(&["--xyz", "val"]),
            (
                Some(RawOpt {
                    name: "xyz",
                    value: None,
                    index: None
                }),
                &["val"][..]
            )
        );
    }

    #[test]
    fn no_abbreviation() {
        assert_eq!(parse(&["--aa"]).0.map(|opt| opt.index), Some(None));
    }

    #[test]
    fn not_long() {
        assert_eq!(parse(&["--", "--aaa"]), (None, &["--", "--aaa"][..]));
        assert_eq!(parse(&["-aaa"]), (None, &["-aaa"][..]));
        assert_eq!(parse(&["aaa"]), (None, &["aaa"][..]));
        assert_eq!(parse(&[]), (None, &[][..]));
    }
}
