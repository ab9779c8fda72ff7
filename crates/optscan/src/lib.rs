//! `getopt_long`-style argument scanning
//!
//! Options are described by a table of [`OptionDescriptor`]s, each carrying a caller-defined
//! identity.  [`getopt`] walks an argument vector, hands every option occurrence to a callback
//! as a [`ParsedOption`] and returns the positional arguments.  [`Scanner`] exposes the same
//! walk as an iterator.
//!
//! Supported syntax:
//! - `-x`, clustered as `-xyz`
//! - `-xVALUE` for options that take a value, `-x VALUE` when it is required
//! - `--name`, `--name=VALUE`, and `--name VALUE` when the value is required
//! - `--` ends option parsing
//!
//! Scanning never fails.  Unrecognized names, unexpected values and missing values are left
//! for the caller to report, see [`ParsedOption::anomaly`].
//!
//! ## Example
//!
//! ```
//! use optscan::ArgRequirement;
//! use optscan::OptionDescriptor;
//!
//! const DESCRIPTORS: &[OptionDescriptor<char>] = &[
//!     OptionDescriptor::both('n', 'n', "number", ArgRequirement::Required),
//!     OptionDescriptor::long('s', "shout", ArgRequirement::NoArgument),
//! ];
//!
//! let args = ["hello", "--number=3", "--shout", "world", "--loud"];
//! let mut messages = Vec::new();
//! let positional = optscan::getopt(&args, DESCRIPTORS, |opt| {
//!     if let Err(anomaly) = opt.check() {
//!         messages.push(anomaly.to_string());
//!     }
//! });
//! assert_eq!(positional, ["world"]);
//! assert_eq!(messages, ["unrecognized option `loud`"]);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

mod descriptor;
mod error;
mod long;
mod parsed;
mod queue;
mod scanner;
mod short;

pub use descriptor::ArgRequirement;
pub use descriptor::OptionDescriptor;
pub use error::Anomaly;
pub use parsed::ParsedOption;
pub use scanner::getopt;
pub use scanner::Scanned;
pub use scanner::Scanner;
