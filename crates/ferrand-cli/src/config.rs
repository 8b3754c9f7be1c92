use crate::invocation::Invocation;
use anyhow::{Context, bail};
use clap::Parser;

/// Command-line configuration for the `ferrand` binary.
///
/// Every option can also be supplied through the environment (or a `.env`
/// file), which is how load-test pipelines usually pass them.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ferrand",
    version,
    about = "Evaluate random value functions such as RandomInteger(1,10)"
)]
pub struct CliArgs {
    /// Function invocations, e.g. `RandomInteger(1,10)` or
    /// `${__RandomDate()}`.
    pub invocations: Vec<String>,

    /// Number of evaluations per invocation on each worker.
    ///
    /// Environment variable: `FERRAND_COUNT`
    #[arg(short = 'n', long, env = "FERRAND_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Number of worker threads, each acting as one simulated client. All
    /// workers share a single random source.
    ///
    /// Environment variable: `FERRAND_WORKERS`
    #[arg(short, long, env = "FERRAND_WORKERS", default_value_t = 1)]
    pub workers: usize,

    /// Fixed seed for the shared random source. Defaults to the current time.
    ///
    /// Environment variable: `FERRAND_SEED`
    #[arg(long, env = "FERRAND_SEED")]
    pub seed: Option<u64>,

    /// Print every registered function with its usage, then evaluate any
    /// invocations given.
    #[arg(short, long, default_value_t = false)]
    pub list: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub invocations: Vec<Invocation>,
    pub count: usize,
    pub workers: usize,
    pub seed: Option<u64>,
    pub list: bool,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("FERRAND_COUNT must be greater than 0");
        }

        if args.workers == 0 {
            bail!("FERRAND_WORKERS must be greater than 0");
        }

        if args.invocations.is_empty() && !args.list {
            bail!("nothing to do: pass at least one invocation or --list");
        }

        let invocations = args
            .invocations
            .iter()
            .map(|raw| {
                raw.parse::<Invocation>()
                    .with_context(|| format!("invalid invocation {raw:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            invocations,
            count: args.count,
            workers: args.workers,
            seed: args.seed,
            list: args.list,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(argv: &[&str]) -> anyhow::Result<Config> {
        let args = CliArgs::try_parse_from(argv)?;
        Config::try_from(args)
    }

    #[test]
    fn parses_invocations_and_options() {
        let config = config(&[
            "ferrand",
            "RandomInteger(1, 10)",
            "RandomChoice(a,b)",
            "-n",
            "3",
            "--workers",
            "2",
            "--seed",
            "9",
        ])
        .unwrap();
        assert_eq!(config.invocations.len(), 2);
        assert_eq!(config.invocations[0].key, "RandomInteger");
        assert_eq!(config.count, 3);
        assert_eq!(config.workers, 2);
        assert_eq!(config.seed, Some(9));
        assert!(!config.list);
    }

    #[test]
    fn list_alone_is_enough() {
        let config = config(&["ferrand", "--list"]).unwrap();
        assert!(config.list);
        assert!(config.invocations.is_empty());
    }

    #[test]
    fn rejects_zero_counts() {
        let err = config(&["ferrand", "RandomLong()", "-n", "0"]).unwrap_err();
        assert!(err.to_string().contains("FERRAND_COUNT"));
        let err = config(&["ferrand", "RandomLong()", "-w", "0"]).unwrap_err();
        assert!(err.to_string().contains("FERRAND_WORKERS"));
    }

    #[test]
    fn rejects_empty_command_line() {
        assert!(config(&["ferrand"]).is_err());
    }

    #[test]
    fn reports_malformed_invocation() {
        let err = config(&["ferrand", "RandomInteger(1"]).unwrap_err();
        assert!(err.to_string().contains("RandomInteger(1"), "{err}");
    }
}
