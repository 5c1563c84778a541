pub(crate) mod series;
pub(crate) mod utils;

use anyhow::Result;
use log::{debug, error, warn};
use std::path::Path;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "warp_stat", about = "Summarizes packed binary series files")]
struct CliArgs {
    /// Glob selecting the `.bin` series (and their `.toml` meta files)
    glob: String,
    /// Where normalized copies are written; normalization is skipped without it
    #[structopt(short = "o", long = "output")]
    output: Option<String>,
    /// Log at debug level
    #[structopt(long = "verbose")]
    verbose: bool,
}

/// Aborts the run before or while collecting input files
#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Malformed glob: {0}")]
    InvalidPattern(#[from] glob::PatternError),
    #[error("Unreadable glob match: {0}")]
    UnreadableMatch(#[from] glob::GlobError),
    #[error("Missing output directory: {0}")]
    MissingOutputDir(String),
}

const MATCH_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

fn init_logger(verbose: bool) {
    let mut builder = if verbose {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(log::LevelFilter::Debug);
        builder
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
    };
    builder.init();
}

fn main() -> Result<()> {
    let args = CliArgs::from_args();
    init_logger(args.verbose);
    prepare(args)
}

fn prepare(args: CliArgs) -> Result<()> {
    let output_path = args.output.as_deref().map(Path::new);
    if let Some(output_path) = output_path {
        if !output_path.is_dir() {
            return Err(
                CliError::MissingOutputDir(output_path.display().to_string()).into(),
            );
        }
    }

    let glob = glob::glob_with(&args.glob, MATCH_OPTIONS).map_err(CliError::from)?;
    for path in glob {
        let path = path.map_err(CliError::from)?;

        if path.is_dir() {
            continue;
        }

        match path.extension().and_then(|x| x.to_str()) {
            Some(extension) => match extension.to_ascii_lowercase().as_str() {
                "bin" => {
                    // a broken series should not stop the remaining ones
                    if let Err(err) = series::process(&path, output_path) {
                        error!("Could not process `{}`: {:#}", path.display(), err);
                    }
                }
                "toml" => debug!("Skipping meta file `{}`", path.display()),
                _ => warn!("Skipping `{}`, not a series file", path.display()),
            },
            None => warn!("Skipping `{}`, it has no extension", path.display()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(glob: String, output: Option<String>) -> CliArgs {
        CliArgs {
            glob,
            output,
            verbose: false,
        }
    }

    #[test]
    fn missing_output_dir_fails_early() {
        let result = prepare(args("*.bin".into(), Some("/nonexistent/warp_stat".into())));

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MissingOutputDir(_))
        ));
    }

    #[test]
    fn broken_series_does_not_stop_the_run() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let out = tempfile::tempdir()?;
        std::fs::write(dir.path().join("broken.bin"), [0u8; 3])?;
        std::fs::write(dir.path().join("notes.txt"), "")?;
        warp_format::write_series(&dir.path().join("good.BIN"), &[1.0f32, 3.0])?;
        std::fs::write(dir.path().join("series.toml"), "normalize = true")?;

        let pattern = format!("{}/*", dir.path().display());
        prepare(args(pattern, Some(out.path().display().to_string())))?;

        let normalized: Vec<f32> = warp_format::read_series(&out.path().join("good.norm.bin"))?;
        assert_eq!(normalized, vec![-1.0, 1.0]);

        Ok(())
    }

    #[test]
    fn malformed_glob() {
        let err = prepare(args("[".into(), None)).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
