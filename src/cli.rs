use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use models::{csv::EXPORT_FILE_NAME, feed::EXPORT_RESULTS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the newest complete reading.
    Current,
    /// Write the deduplicated history as CSV.
    Export { path: PathBuf, results: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(Command),
    Help,
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [SUBCOMMAND] [OPTIONS]\n\
         Subcommands:\n    \
             current                           print the latest reading (default)\n    \
             export [path] [--results <count>] save the history as CSV (default: {EXPORT_FILE_NAME}, {EXPORT_RESULTS} entries)\n"
    )
}

/// Parses everything after the program name.
pub fn parse_args<I>(args: I) -> anyhow::Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let Some(subcommand) = args.next() else {
        return Ok(Invocation::Run(Command::Current));
    };

    match subcommand.as_str() {
        "current" => {
            if let Some(extra) = args.next() {
                bail!("unexpected argument '{extra}'");
            }
            Ok(Invocation::Run(Command::Current))
        }
        "export" => {
            let mut path = None::<PathBuf>;
            let mut results = EXPORT_RESULTS;

            while let Some(arg) = args.next() {
                if arg == "--results" {
                    let count = args
                        .next()
                        .ok_or_else(|| anyhow!("--results needs a count"))?;
                    results = count
                        .parse()
                        .with_context(|| format!("invalid result count '{count}'"))?;
                    if results == 0 {
                        bail!("result count must be at least 1");
                    }
                } else if path.is_none() && !arg.starts_with("--") {
                    path = Some(arg.into());
                } else {
                    bail!("unexpected argument '{arg}'");
                }
            }

            Ok(Invocation::Run(Command::Export {
                path: path.unwrap_or_else(|| EXPORT_FILE_NAME.into()),
                results,
            }))
        }
        "help" | "-h" | "--help" => Ok(Invocation::Help),
        other => bail!("unknown subcommand '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Invocation> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn defaults_to_current() {
        assert_eq!(parse(&[]).unwrap(), Invocation::Run(Command::Current));
        assert_eq!(parse(&["current"]).unwrap(), Invocation::Run(Command::Current));
    }

    #[test]
    fn export_defaults() {
        assert_eq!(
            parse(&["export"]).unwrap(),
            Invocation::Run(Command::Export {
                path: "complete_history.csv".into(),
                results: 8000,
            })
        );
    }

    #[test]
    fn export_with_path_and_count() {
        assert_eq!(
            parse(&["export", "--results", "200", "out/bed.csv"]).unwrap(),
            Invocation::Run(Command::Export {
                path: "out/bed.csv".into(),
                results: 200,
            })
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse(&["export", "--results"]).is_err());
        assert!(parse(&["export", "--results", "lots"]).is_err());
        assert!(parse(&["export", "--results", "0"]).is_err());
        assert!(parse(&["export", "a.csv", "b.csv"]).is_err());
        assert!(parse(&["current", "now"]).is_err());
        assert!(parse(&["serve"]).is_err());
    }

    #[test]
    fn help() {
        assert_eq!(parse(&["--help"]).unwrap(), Invocation::Help);
        assert!(usage("strawberry-env").starts_with("Usage: strawberry-env"));
    }
}
