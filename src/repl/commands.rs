//! Command implementations
//!
//! All user-facing printing happens here; the cache, cursor, and client
//! below this layer never write to the terminal.

use std::io::Write;

use rand::Rng;

use crate::api::LOCATION_AREAS_URL;
use crate::pagination::Direction;

use super::{App, Outcome, ReplError, COMMANDS};

/// A roll above this threshold lets the creature escape
const CATCH_THRESHOLD: u32 = 40;

pub fn help() -> Result<(), ReplError> {
    println!("Available commands:");
    for command in COMMANDS {
        println!("  {} - {}", command.name, command.description);
    }
    Ok(())
}

pub fn exit() -> Result<Outcome, ReplError> {
    println!("Bye!");
    Ok(Outcome::Quit)
}

pub fn clear() -> Result<(), ReplError> {
    // ANSI: clear screen, cursor to top-left
    print!("\x1b[2J\x1b[1;1H");
    let _ = std::io::stdout().flush();
    Ok(())
}

/// `map`: fresh listing from the first page, resetting any navigation.
pub async fn map(app: &mut App) -> Result<(), ReplError> {
    app.cursor.advance(Direction::None);
    list_locations(app).await
}

/// `next`: one page forward through the location listing.
pub async fn next(app: &mut App) -> Result<(), ReplError> {
    app.cursor.advance(Direction::Forward);
    list_locations(app).await
}

/// `previous`: one page backward through the location listing.
pub async fn previous(app: &mut App) -> Result<(), ReplError> {
    app.cursor.advance(Direction::Backward);
    list_locations(app).await
}

/// Shared fetch path for `map`/`next`/`previous`: resolve the target URL
/// through the cursor, fetch (cache first), then refresh the cursor from the
/// page that came back.
async fn list_locations(app: &mut App) -> Result<(), ReplError> {
    let url = app.cursor.resolve_url(LOCATION_AREAS_URL)?;
    let page = app.client.list_location_areas(&url).await?;
    app.cursor
        .update_from_page(page.next.as_deref(), page.previous.as_deref());

    for location in &page.results {
        println!("- {}", location.name);
    }
    Ok(())
}

pub async fn explore(app: &mut App, args: &[&str]) -> Result<(), ReplError> {
    let area = match args {
        [] => return Err(ReplError::Usage("no area specified")),
        [area] => *area,
        _ => return Err(ReplError::Usage("only one area can be explored at a time")),
    };

    let area = app.client.explore_area(area).await?;
    for encounter in &area.pokemon_encounters {
        println!("- {}", encounter.pokemon.name);
    }
    Ok(())
}

pub async fn catch(app: &mut App, args: &[&str]) -> Result<(), ReplError> {
    let name = match args {
        [] => return Err(ReplError::Usage("no pokemon specified")),
        [name] => *name,
        _ => {
            return Err(ReplError::Usage(
                "only one pokemon can be caught at a time",
            ))
        }
    };

    let pokemon = app.client.get_pokemon(name).await?;
    println!("Throwing a Pokeball at {}...", pokemon.name);

    // Roll across the creature's base experience; clamp so a missing or zero
    // value can't produce an empty range
    let range = pokemon.base_experience.unwrap_or(0).max(1);
    let roll = rand::rng().random_range(0..range);
    if roll > CATCH_THRESHOLD {
        println!("{} escaped!", pokemon.name);
        return Ok(());
    }

    println!("{} was caught!", pokemon.name);
    app.dex.add(pokemon);
    Ok(())
}

pub fn inspect(app: &mut App, args: &[&str]) -> Result<(), ReplError> {
    let name = match args {
        [] => return Err(ReplError::Usage("no pokemon specified")),
        [name] => *name,
        _ => {
            return Err(ReplError::Usage(
                "only one pokemon can be inspected at a time",
            ))
        }
    };

    let pokemon = app
        .dex
        .get(name)
        .ok_or_else(|| ReplError::NotCaught(name.to_string()))?;

    println!("Name: {}", pokemon.name);
    println!("Height: {}", pokemon.height);
    println!("Weight: {}", pokemon.weight);
    println!("Stats:");
    for stat in &pokemon.stats {
        println!("  - {}: {}", stat.stat.name, stat.base_stat);
    }
    println!("Types:");
    for slot in &pokemon.types {
        println!("  - {}", slot.kind.name);
    }
    Ok(())
}

pub fn pokedex(app: &mut App, args: &[&str]) -> Result<(), ReplError> {
    if !args.is_empty() {
        return Err(ReplError::Usage("no arguments expected"));
    }

    if app.dex.is_empty() {
        println!("Your Pokedex is empty");
        return Ok(());
    }

    println!("Your Pokedex:");
    for name in app.dex.names() {
        println!("  - {}", name);
    }
    Ok(())
}
