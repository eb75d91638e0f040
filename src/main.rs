//! Pokedex - browse the PokeAPI creature catalog from your terminal
//!
//! An interactive prompt that lists paginated location areas, explores the
//! creatures found in an area, and catches them into an in-memory Pokedex.
//! API responses are memoized in an expiring cache so page navigation and
//! repeat lookups avoid refetching.

mod api;
mod cache;
mod cli;
mod pagination;
mod pokedex;
mod repl;

use clap::Parser;

use api::ApiClient;
use cache::{Cache, Reaper};
use cli::Cli;
use repl::App;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // One cache for the whole process, swept in the background for the
    // lifetime of the prompt loop
    let cache = Cache::new();
    let reaper = Reaper::spawn(cache.clone(), cli.cache_ttl());

    let mut app = App::new(ApiClient::new(cache));
    repl::run(&mut app).await?;

    reaper.stop().await;
    Ok(())
}
