//! Address book - command line entry point.
//!
//! Treats the command line arguments as one person description, e.g.
//!
//! ```text
//! address-book n/John Doe p/98765432 e/john@example.com a/123 Clementi Rd t/friend
//! ```
//!
//! and prints the parsed person on stdout. Logs go to stderr.

use address_book::config::OutputFormat;
use address_book::parser::parse_person;
use address_book::Config;
use anyhow::{anyhow, bail, Context, Result};
use std::ffi::OsString;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only so stdout carries just the output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(output_format = %config.output_format, "Configuration loaded");

    let args = join_args(std::env::args_os().skip(1))?;
    if args.len() > config.max_input_length {
        bail!(
            "Input is {} bytes, longer than the configured maximum of {}",
            args.len(),
            config.max_input_length
        );
    }

    let person = match parse_person(&args) {
        Ok(person) => person,
        Err(e) => {
            error!("Failed to parse person: {}", e);
            return Err(e.into());
        }
    };

    match config.output_format {
        OutputFormat::Text => println!("{}", person),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&person)?),
    }

    Ok(())
}

/// Join the command line arguments into one input line.
///
/// Arguments that are not valid UTF-8 are reported as an error.
fn join_args(args: impl IntoIterator<Item = OsString>) -> Result<String> {
    let args = args
        .into_iter()
        .map(|arg| {
            arg.into_string().map_err(|arg| {
                anyhow!("Argument is not valid UTF-8: {}", arg.to_string_lossy())
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(args.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_args() {
        let args = ["n/John", "Doe", "p/98765432"].map(OsString::from);
        assert_eq!(join_args(args).unwrap(), "n/John Doe p/98765432");
        assert_eq!(join_args(Vec::new()).unwrap(), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_join_args_rejects_invalid_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec![
            OsString::from("n/John"),
            OsString::from_vec(vec![b'p', b'/', 0xff, 0xfe]),
        ];
        let err = join_args(args).unwrap_err();
        assert!(err.to_string().starts_with("Argument is not valid UTF-8"));
    }
}
