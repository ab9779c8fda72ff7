use crate::long::match_long;
use crate::parsed::RawOpt;
use crate::queue::ArgQueue;
use crate::short::ShortCluster;
use crate::OptionDescriptor;
use crate::ParsedOption;

const END_MARKER: &str = "--";

/// What a single step of a [`Scanner`] produced
#[derive(Debug, PartialEq, Eq)]
pub enum Scanned<'a, Id> {
    /// An option occurrence, recognized or not
    Opt(ParsedOption<'a, Id>),
    /// An argument that is neither an option nor an option's value
    Positional(&'a str),
}

impl<Id> Clone for Scanned<'_, Id> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Id> Copy for Scanned<'_, Id> {}

/// Pull-based scan over an argument vector
///
/// The first argument is taken as the program name.  Occurrences and positionals are yielded
/// in the order they were written.  After `--`, every remaining argument is yielded as
/// [`Scanned::Positional`] without being examined.
///
/// ```
/// use optscan::ArgRequirement;
/// use optscan::OptionDescriptor;
/// use optscan::Scanned;
/// use optscan::Scanner;
///
/// const DESCRIPTORS: &[OptionDescriptor<&str>] = &[
///     OptionDescriptor::both("verbose", 'v', "verbose", ArgRequirement::NoArgument),
///     OptionDescriptor::both("output", 'o', "output", ArgRequirement::Required),
/// ];
///
/// let args = ["prog", "-vofile", "input", "--", "--verbose"];
/// let mut scanner = Scanner::new(&args, DESCRIPTORS);
/// assert_eq!(scanner.bin(), Some("prog"));
///
/// let Some(Scanned::Opt(opt)) = scanner.next() else { panic!() };
/// assert_eq!(opt.id(), Some(&"verbose"));
/// let Some(Scanned::Opt(opt)) = scanner.next() else { panic!() };
/// assert_eq!((opt.id(), opt.value), (Some(&"output"), Some("file")));
/// assert_eq!(scanner.next(), Some(Scanned::Positional("input")));
/// assert_eq!(scanner.next(), Some(Scanned::Positional("--verbose")));
/// assert_eq!(scanner.next(), None);
/// ```
#[derive(Debug)]
pub struct Scanner<'a, S, Id> {
    bin: Option<&'a str>,
    queue: ArgQueue<'a, S>,
    descriptors: &'a [OptionDescriptor<Id>],
    cluster: Option<ShortCluster<'a>>,
    escaped: bool,
}

impl<'a, S: AsRef<str>, Id> Scanner<'a, S, Id> {
    pub fn new(args: &'a [S], descriptors: &'a [OptionDescriptor<Id>]) -> Self {
        let (bin, rest) = match args.split_first() {
            Some((bin, rest)) => (Some(bin.as_ref()), rest),
            None => (None, args),
        };
        Self {
            bin,
            queue: ArgQueue::new(rest),
            descriptors,
            cluster: None,
            escaped: false,
        }
    }

    /// The program name, if the argument vector was not empty
    pub fn bin(&self) -> Option<&'a str> {
        self.bin
    }

    /// Arguments not yet looked at
    ///
    /// The unexpanded tail of a short-option cluster that is in progress is not included.
    pub fn remaining(&self) -> &'a [S] {
        self.queue.remaining()
    }

    fn opt(&self, raw: RawOpt<'a>) -> Scanned<'a, Id> {
        log::trace!(
            "option `{}`{}{}",
            raw.name,
            if raw.index.is_some() { "" } else { " (unrecognized)" },
            raw.value.map(|v| format!(" = `{v}`")).unwrap_or_default(),
        );
        Scanned::Opt(raw.resolve(self.descriptors))
    }
}

impl<'a, S: AsRef<str>, Id> Iterator for Scanner<'a, S, Id> {
    type Item = Scanned<'a, Id>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(cluster) = &mut self.cluster {
            if let Some(raw) = cluster.next_opt(&mut self.queue, self.descriptors) {
                return Some(self.opt(raw));
            }
            self.cluster = None;
        }

        if self.escaped {
            let arg = self.queue.pop()?;
            log::trace!("positional `{arg}` (after `{END_MARKER}`)");
            return Some(Scanned::Positional(arg));
        }

        if let Some(raw) = match_long(&mut self.queue, self.descriptors) {
            return Some(self.opt(raw));
        }

        if let Some(cluster) = ShortCluster::accept(&mut self.queue) {
            self.cluster = Some(cluster);
            return self.next();
        }

        let arg = self.queue.pop()?;
        if arg == END_MARKER {
            log::trace!("end of options, {} argument(s) left", self.queue.remaining().len());
            self.escaped = true;
            return self.next();
        }
        log::trace!("positional `{arg}`");
        Some(Scanned::Positional(arg))
    }
}

impl<S: AsRef<str>, Id> std::iter::FusedIterator for Scanner<'_, S, Id> {}

/// Scan `args`, reporting each option occurrence to `callback` and returning the positionals
///
/// `args[0]` is the program name and is skipped.  `callback` runs once per occurrence, in order,
/// including for unrecognized options; see [`ParsedOption::anomaly`] for what a caller
/// usually reports.  Everything after `--` is returned as-is.
///
/// ```
/// use optscan::ArgRequirement;
/// use optscan::OptionDescriptor;
///
/// #[derive(Debug, PartialEq)]
/// enum Opt {
///     All,
///     Block,
/// }
///
/// const DESCRIPTORS: &[OptionDescriptor<Opt>] = &[
///     OptionDescriptor::both(Opt::All, 'a', "all", ArgRequirement::NoArgument),
///     OptionDescriptor::both(Opt::Block, 'b', "block", ArgRequirement::Required),
/// ];
///
/// let args = ["ls", "-ab", "4", "dir", "--all", "--", "-a"];
/// let mut seen = Vec::new();
/// let positional = optscan::getopt(&args, DESCRIPTORS, |opt| {
///     seen.push((opt.id(), opt.value));
/// });
/// assert_eq!(
///     seen,
///     [(Some(&Opt::All), None), (Some(&Opt::Block), Some("4")), (Some(&Opt::All), None)]
/// );
/// assert_eq!(positional, ["dir", "-a"]);
/// ```
pub fn getopt<'a, S, Id, F>(
    args: &'a [S],
    descriptors: &'a [OptionDescriptor<Id>],
    mut callback: F,
) -> Vec<&'a str>
where
    S: AsRef<str>,
    F: FnMut(ParsedOption<'a, Id>),
{
    let mut positional = Vec::new();
    let mut occurrences = 0_usize;
    for scanned in Scanner::new(args, descriptors) {
        match scanned {
            Scanned::Opt(opt) => {
                occurrences += 1;
                callback(opt);
            }
            Scanned::Positional(arg) => positional.push(arg),
        }
    }
    log::debug!(
        "scanned {} argument(s): {occurrences} option(s), {} positional",
        args.len().saturating_sub(1),
        positional.len()
    );
    positional
}
