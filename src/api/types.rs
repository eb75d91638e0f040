//! PokeAPI payload shapes
//!
//! Serde structs for the three endpoints the tool uses. Only the fields the
//! commands actually display are decoded; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Name/URL pair used throughout the PokeAPI for references to other resources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location-area listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationPage {
    /// Total number of location areas in the catalog
    pub count: u32,
    /// URL of the following page; `null` on the last page
    pub next: Option<String>,
    /// URL of the preceding page; `null` on the first page
    pub previous: Option<String>,
    /// The location areas on this page
    pub results: Vec<NamedResource>,
}

/// A single location area with the creatures encountered there
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationArea {
    pub name: String,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One possible encounter in a location area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// A creature as returned by the pokemon endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Drives the catch check; `null` for a few special forms upstream
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonTypeSlot>,
}

/// One base stat entry (hp, attack, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One type slot (grass, poison, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
