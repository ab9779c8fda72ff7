//! Prints how `optscan` sees the command-line
//!
//! ```console
//! $ optscan-demo -ab val --ccc=x --xyz file
//! option a
//! option b with arg val
//! option ccc with arg x
//! unrecognized option `xyz`
//! non-option ARGV-elements: file
//! ```

use std::io::Write as _;

use optscan::ArgRequirement;
use optscan::OptionDescriptor;
use optscan::ParsedOption;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum DemoOpt {
    A,
    B,
    C,
    D,
    E,
}

const DESCRIPTORS: &[OptionDescriptor<DemoOpt>] = &[
    OptionDescriptor::both(DemoOpt::A, 'a', "aaa", ArgRequirement::NoArgument),
    OptionDescriptor::both(DemoOpt::B, 'b', "bbb", ArgRequirement::Required),
    OptionDescriptor::both(DemoOpt::C, 'c', "ccc", ArgRequirement::Optional),
    OptionDescriptor::short(DemoOpt::D, 'd', ArgRequirement::NoArgument),
    OptionDescriptor::long(DemoOpt::E, "eee", ArgRequirement::NoArgument),
];

const ANOMALY: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red)));

fn main() -> std::io::Result<()> {
    env_logger::init();

    let raw = std::env::args_os()
        .map(|arg| {
            arg.into_string().unwrap_or_else(|arg| {
                log::warn!("argument {arg:?} is not valid UTF-8, replacing invalid sequences");
                arg.to_string_lossy().into_owned()
            })
        })
        .collect::<Vec<_>>();

    let mut stdout = anstream::stdout().lock();
    let mut reported = Ok(());
    let positional = optscan::getopt(&raw, DESCRIPTORS, |opt| {
        if reported.is_ok() {
            reported = report(&mut stdout, opt);
        }
    });
    reported?;

    if !positional.is_empty() {
        write!(stdout, "non-option ARGV-elements:")?;
        for arg in &positional {
            write!(stdout, " {arg}")?;
        }
        writeln!(stdout)?;
    }
    stdout.flush()
}

fn report(out: &mut impl std::io::Write, opt: ParsedOption<'_, DemoOpt>) -> std::io::Result<()> {
    log::debug!("{:?} from `{}`", opt.id(), opt.name);
    if let Some(anomaly) = opt.anomaly() {
        return writeln!(out, "{}{anomaly}{}", ANOMALY.render(), ANOMALY.render_reset());
    }
    match opt.value {
        Some(value) => writeln!(out, "option {} with arg {value}", opt.name),
        None => writeln!(out, "option {}", opt.name),
    }
}
