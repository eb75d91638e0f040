//! Command-line interface parsing
//!
//! The tool is interactive; the only startup configuration is how long
//! cached responses live before the background reaper evicts them.

use std::time::Duration;

use clap::Parser;

/// Pokedex - browse the PokeAPI creature catalog from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokedex backed by the PokeAPI")]
#[command(version)]
pub struct Cli {
    /// How long cached API responses live, in seconds.
    ///
    /// The cache reaper sweeps on this same interval, so an entry is gone at
    /// most two intervals after it was stored.
    #[arg(long, value_name = "SECONDS", default_value_t = 300)]
    pub cache_ttl: u64,
}

impl Cli {
    /// The reaper interval derived from `--cache-ttl`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cache_ttl_is_five_minutes() {
        let cli = Cli::parse_from(["pokedex"]);
        assert_eq!(cli.cache_ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_cache_ttl_override() {
        let cli = Cli::parse_from(["pokedex", "--cache-ttl", "60"]);
        assert_eq!(cli.cache_ttl(), Duration::from_secs(60));
    }
}
