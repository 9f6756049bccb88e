use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub manifest_path: String,
    pub root_dir: String,
    pub settings_path: Option<String>,
    pub concurrency_limit: Option<usize>,
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "cranmirror",
    version,
    about = "Download package files from prioritised mirror lists into a CRAN-like directory layout"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count
    )]
    verbose: u8,

    #[arg(
        long = "jsonFile",
        visible_alias = "json-file",
        value_name = "FILE",
        help = "JSON manifest listing the files to download",
        default_value = ""
    )]
    json_file: String,

    #[arg(
        long = "dir",
        value_name = "DIR",
        help = "Root directory to download the files into",
        default_value = "."
    )]
    dir: String,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional settings file"
    )]
    config: Option<String>,

    #[arg(
        short = 'j',
        long = "concurrency",
        value_name = "N",
        help = "Maximum number of simultaneous downloads (overrides settings)"
    )]
    concurrency: Option<usize>,
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn into_command(self) -> Command {
        Command {
            manifest_path: self.json_file,
            root_dir: self.dir,
            settings_path: self.config,
            concurrency_limit: self.concurrency,
        }
    }
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();
    let log_level = cli.log_level();

    let mut env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();
    if log_level < Level::TRACE {
        for noisy in ["hyper=warn", "hyper_util=warn", "reqwest=warn", "opendal=warn"] {
            if let Ok(directive) = noisy.parse::<Directive>() {
                env_filter = env_filter.add_directive(directive);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(env_filter)
        .init();

    Args {
        command: cli.into_command(),
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cranmirror"]).unwrap();
        assert_eq!(cli.log_level(), Level::INFO);
        assert_eq!(
            cli.into_command(),
            Command {
                manifest_path: String::new(),
                root_dir: ".".to_string(),
                settings_path: None,
                concurrency_limit: None,
            }
        );
    }

    #[test]
    fn test_camel_case_manifest_flag() {
        let cli = Cli::try_parse_from([
            "cranmirror",
            "--jsonFile",
            "~/jobs.json",
            "--dir",
            "/srv/cran",
        ])
        .unwrap();
        let command = cli.into_command();
        assert_eq!(command.manifest_path, "~/jobs.json");
        assert_eq!(command.root_dir, "/srv/cran");
    }

    #[test]
    fn test_kebab_case_alias_and_overrides() {
        let cli = Cli::try_parse_from([
            "cranmirror",
            "-vv",
            "--json-file",
            "jobs.json",
            "-c",
            "cranmirror.toml",
            "-j",
            "4",
        ])
        .unwrap();
        assert_eq!(cli.log_level(), Level::TRACE);
        let command = cli.into_command();
        assert_eq!(command.manifest_path, "jobs.json");
        assert_eq!(command.settings_path.as_deref(), Some("cranmirror.toml"));
        assert_eq!(command.concurrency_limit, Some(4));
    }
}
