//! Diagnostic output on stderr.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable switching log output to JSON.
const LOG_JSON_ENV: &str = "ADDRKIT_LOG_JSON";

/// Targets that `--verbose` raises above the `warn` baseline.
const CRATE_TARGETS: [&str; 2] = ["addrkit", "addrkit_btc"];

/// Filter directives for a `-v` count: 0 keeps everything at `warn`, 1 shows
/// this tool's `debug` events, 2 or more its `trace` events.
fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return "warn".to_string(),
        1 => "debug",
        _ => "trace",
    };

    let mut directives = String::from("warn");
    for target in CRATE_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

/// Install the global subscriber.
///
/// `RUST_LOG`, when set, overrides the verbosity flag entirely.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));
    let use_json = std::env::var(LOG_JSON_ENV).is_ok_and(|value| value == "1");

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    let _ = if use_json {
        builder.json().try_init()
    } else {
        builder.without_time().with_target(verbosity > 1).compact().try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(0), "warn");
        assert_eq!(
            default_directives(1),
            "warn,addrkit=debug,addrkit_btc=debug"
        );
        assert_eq!(
            default_directives(3),
            "warn,addrkit=trace,addrkit_btc=trace"
        );
    }

    #[test]
    fn test_default_directives_parse() {
        for verbosity in 0..3 {
            assert!(EnvFilter::try_new(default_directives(verbosity)).is_ok());
        }
    }
}
