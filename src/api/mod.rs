//! PokeAPI access layer
//!
//! Endpoint URLs, payload shapes, and the cache-backed HTTP client.

mod client;
mod types;

pub use client::{
    ApiClient, ApiError, LOCATION_AREAS_URL, LOCATION_AREA_BASE_URL, POKEMON_BASE_URL,
};
pub use types::{
    LocationArea, LocationPage, NamedResource, Pokemon, PokemonEncounter, PokemonStat,
    PokemonTypeSlot,
};
