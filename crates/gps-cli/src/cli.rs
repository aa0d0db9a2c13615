//! Command-line surface
//!
//! Every model input is its own flag, mirroring the sandbox form: feature
//! count, refactor cost, refactor growth, feature cost, feature growth.

use crate::config::{OutputFormat, Overrides};
use crate::error::ConfigError;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Default log filter when neither `--log` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Parsed invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    /// `--config`
    pub config_path: Option<PathBuf>,
    /// `--log`
    pub log_filter: Option<String>,
    /// Flag values layered over the config
    pub overrides: Overrides,
}

/// Build the `gps` command
#[must_use]
pub fn command() -> Command {
    Command::new("gps")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Greedy Prioritization Sandbox: cumulative cost of refactoring now versus later")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("TOML or YAML config file"),
        )
        .arg(
            Arg::new("features")
                .long("features")
                .short('n')
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .help("Number of features"),
        )
        .arg(
            Arg::new("refactor-cost")
                .long("refactor-cost")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .help("Refactor cost"),
        )
        .arg(
            Arg::new("refactor-growth")
                .long("refactor-growth")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .help("Refactor marginal cost %"),
        )
        .arg(
            Arg::new("feature-cost")
                .long("feature-cost")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .help("Feature cost"),
        )
        .arg(
            Arg::new("feature-growth")
                .long("feature-growth")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .help("Feature marginal cost %"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(OutputFormat::NAMES)
                .help("Output format"),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .value_parser(value_parser!(usize))
                .help("Decimal places in the table"),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help("Chart title"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Reject negative or non-finite input instead of clamping it to 0"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .help("Log filter (overrides RUST_LOG)"),
        )
}

/// Extract an [`Invocation`] from parsed matches
///
/// # Errors
/// Returns [`ConfigError::UnknownOutputFormat`] for a format clap accepted
/// but this build does not know.
pub fn invocation(matches: &ArgMatches) -> Result<Invocation, ConfigError> {
    let format = matches
        .get_one::<String>("format")
        .map(|s| s.parse::<OutputFormat>())
        .transpose()?;

    Ok(Invocation {
        config_path: matches.get_one::<PathBuf>("config").cloned(),
        log_filter: matches.get_one::<String>("log").cloned(),
        overrides: Overrides {
            feature_count: matches.get_one::<i64>("features").copied(),
            base_feature_cost: matches.get_one::<f64>("feature-cost").copied(),
            base_refactor_cost: matches.get_one::<f64>("refactor-cost").copied(),
            feature_cost_growth_pct: matches.get_one::<f64>("feature-growth").copied(),
            refactor_cost_growth_pct: matches.get_one::<f64>("refactor-growth").copied(),
            format,
            precision: matches.get_one::<usize>("precision").copied(),
            title: matches.get_one::<String>("title").cloned(),
            strict: matches.get_flag("strict"),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Invocation {
        let matches = command().try_get_matches_from(args.iter().copied()).unwrap();
        invocation(&matches).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn no_flags_means_no_overrides() {
        assert_eq!(parse(&["gps"]), Invocation::default());
    }

    #[test]
    fn every_parameter_flag_maps_to_a_field() {
        let inv = parse(&[
            "gps",
            "--features",
            "7",
            "--feature-cost",
            "3.5",
            "--refactor-cost",
            "9",
            "--feature-growth",
            "15",
            "--refactor-growth",
            "2.5",
        ]);
        let o = inv.overrides;
        assert_eq!(o.feature_count, Some(7));
        assert_eq!(o.base_feature_cost, Some(3.5));
        assert_eq!(o.base_refactor_cost, Some(9.0));
        assert_eq!(o.feature_cost_growth_pct, Some(15.0));
        assert_eq!(o.refactor_cost_growth_pct, Some(2.5));
    }

    #[test]
    fn negative_numbers_reach_the_clamp() {
        let inv = parse(&["gps", "--features", "-3", "--feature-cost", "-1.5"]);
        assert_eq!(inv.overrides.feature_count, Some(-3));
        assert_eq!(inv.overrides.base_feature_cost, Some(-1.5));
    }

    #[test]
    fn output_flags() {
        let inv = parse(&[
            "gps", "-f", "chart", "--precision", "4", "--title", "Mobile app", "--strict", "--log",
            "debug", "-c", "gps.toml",
        ]);
        assert_eq!(inv.overrides.format, Some(OutputFormat::Chart));
        assert_eq!(inv.overrides.precision, Some(4));
        assert_eq!(inv.overrides.title.as_deref(), Some("Mobile app"));
        assert!(inv.overrides.strict);
        assert_eq!(inv.log_filter.as_deref(), Some("debug"));
        assert_eq!(inv.config_path, Some(PathBuf::from("gps.toml")));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(command()
            .try_get_matches_from(["gps", "--format", "svg"])
            .is_err());
    }
}
