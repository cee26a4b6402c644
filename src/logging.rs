use tracing_subscriber::EnvFilter;

/// Workspace crate targets that participate in log filtering.
const CRATE_TARGETS: &[&str] = &[
    "demeter",
    "demeter_agronomy",
    "demeter_forecast",
    "demeter_schedule",
];

/// Initialize tracing from the CLI `-v` count: 0 warns, 1 informs,
/// 2 debugs, 3+ traces. A set `RUST_LOG` env var wins over the flag.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds a comma-separated directive string covering every workspace crate
/// at the level the verbosity count selects.
fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
