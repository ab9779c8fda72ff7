/// Something the caller will usually want to report about an option occurrence
///
/// Scanning never fails; see [`ParsedOption::anomaly`][crate::ParsedOption::anomaly].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Anomaly<'a> {
    /// No descriptor has this name
    Unrecognized { name: &'a str },
    /// `--name=value` for an option that takes no value
    UnexpectedValue { name: &'a str, value: &'a str },
    /// The option requires a value but the arguments ran out
    MissingValue { name: &'a str },
}

impl<'a> Anomaly<'a> {
    /// The option name as written, without its prefix
    pub fn name(&self) -> &'a str {
        match self {
            Self::Unrecognized { name }
            | Self::UnexpectedValue { name, .. }
            | Self::MissingValue { name } => name,
        }
    }
}

impl std::fmt::Display for Anomaly<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized { name } => write!(formatter, "unrecognized option `{name}`"),
            Self::UnexpectedValue { name, .. } => {
                write!(formatter, "option `{name}` doesn't allow an argument")
            }
            Self::MissingValue { name } => write!(formatter, "option `{name}` requires an argument"),
        }
    }
}

impl std::error::Error for Anomaly<'_> {}
