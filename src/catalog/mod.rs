//! Static game data: item recipes, team compositions, selection priorities
//!
//! Catalogs ship with built-in defaults the way a recipe book does, and
//! can be replaced wholesale from serialized data. The decision engine
//! only ever reads them; the residual purchase list derived from a comp is
//! owned by the match state, not the catalog.

pub mod comps;
pub mod items;

pub use comps::{ChampionInfo, ChampionSpec, CompCatalog, TeamComp};
pub use items::ItemCatalog;
