// Runtime configuration read from the environment. Nothing here changes
// what the menu does; it only tunes diagnostics.

/// Environment variable enabling debug diagnostics on stderr.
pub const VERBOSE_ENV: &str = "ANGKA_VERBOSE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub verbose: bool,
}

impl Config {
    /// Build the config from `ANGKA_VERBOSE`, defaulting to quiet.
    pub fn from_env() -> Self {
        let verbose = std::env::var(VERBOSE_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Config { verbose }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
