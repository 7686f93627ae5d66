//! Team composition catalog
//!
//! Holds the global champion table (cost, board footprint), the ordered
//! list of target compositions, and the selection priority lists for
//! portals and augments. The active comp is selected once per match and
//! can be advanced to the next one; the engine references it and never
//! mutates it.

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::ItemId;

/// Global per-champion facts independent of any comp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionInfo {
    /// Shop price in gold
    pub cost: u32,
    /// Board footprint (1 for most units)
    pub board_size: u8,
}

/// A champion's role inside one composition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionSpec {
    pub name: String,
    /// Desired board slot index
    pub board_position: usize,
    /// Completed items this champion should end up holding
    #[serde(default)]
    pub items: Vec<ItemId>,
    /// Required, non-substitutable member of the finished comp
    #[serde(default)]
    pub final_comp: bool,
}

/// One target composition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamComp {
    pub name: String,
    pub champions: Vec<ChampionSpec>,
    /// Board slots reserved for placed-but-unresolved units, in claim order
    pub unknown_slots: Vec<usize>,
    /// Augment names to prefer, highest priority first
    #[serde(default)]
    pub augment_priorities: Vec<String>,
}

impl TeamComp {
    pub fn spec(&self, name: &str) -> Option<&ChampionSpec> {
        self.champions.iter().find(|spec| spec.name == name)
    }
}

/// The composition catalog: champion table, comps, priority lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompCatalog {
    pub champions: AHashMap<String, ChampionInfo>,
    pub comps: Vec<TeamComp>,
    /// Portal names to vote for, highest priority first
    pub portal_priorities: Vec<String>,
    #[serde(skip, default)]
    active: usize,
}

impl CompCatalog {
    /// Built-in champion table and two stock comps
    pub fn with_defaults() -> Self {
        let mut champions = AHashMap::new();
        let table: &[(&str, u32, u8)] = &[
            ("Ahri", 4, 1),
            ("Akali", 4, 1),
            ("Garen", 1, 1),
            ("Jinx", 3, 1),
            ("Kayle", 2, 1),
            ("Lulu", 2, 1),
            ("Malphite", 1, 1),
            ("Nautilus", 3, 1),
            ("Poppy", 1, 1),
            ("Sett", 5, 2),
            ("Sona", 3, 1),
            ("Vayne", 2, 1),
            ("Warwick", 1, 1),
            ("Yasuo", 5, 1),
            ("Zed", 4, 1),
        ];
        for (name, cost, board_size) in table {
            champions.insert(
                name.to_string(),
                ChampionInfo {
                    cost: *cost,
                    board_size: *board_size,
                },
            );
        }

        let comps = vec![
            TeamComp {
                name: "Slayers".into(),
                champions: vec![
                    ChampionSpec {
                        name: "Zed".into(),
                        board_position: 24,
                        items: vec!["InfinityEdge".into(), "Bloodthirster".into()],
                        final_comp: true,
                    },
                    ChampionSpec {
                        name: "Akali".into(),
                        board_position: 22,
                        items: vec!["JeweledGauntlet".into()],
                        final_comp: true,
                    },
                    ChampionSpec {
                        name: "Ahri".into(),
                        board_position: 3,
                        items: vec!["GuinsoosRageblade".into()],
                        final_comp: true,
                    },
                    ChampionSpec {
                        name: "Nautilus".into(),
                        board_position: 23,
                        items: vec!["BrambleVest".into()],
                        final_comp: false,
                    },
                    ChampionSpec {
                        name: "Vayne".into(),
                        board_position: 1,
                        items: vec![],
                        final_comp: false,
                    },
                    ChampionSpec {
                        name: "Garen".into(),
                        board_position: 25,
                        items: vec![],
                        final_comp: false,
                    },
                ],
                unknown_slots: vec![21, 26, 27, 0, 6],
                augment_priorities: vec![
                    "CyberneticUplink".into(),
                    "CombatTraining".into(),
                    "TinyTitans".into(),
                ],
            },
            TeamComp {
                name: "Vanguard Snipers".into(),
                champions: vec![
                    ChampionSpec {
                        name: "Jinx".into(),
                        board_position: 2,
                        items: vec!["GiantSlayer".into(), "RapidFirecannon".into()],
                        final_comp: true,
                    },
                    ChampionSpec {
                        name: "Yasuo".into(),
                        board_position: 24,
                        items: vec!["Deathblade".into()],
                        final_comp: true,
                    },
                    ChampionSpec {
                        name: "Malphite".into(),
                        board_position: 22,
                        items: vec!["SunfireCape".into()],
                        final_comp: false,
                    },
                    ChampionSpec {
                        name: "Poppy".into(),
                        board_position: 23,
                        items: vec![],
                        final_comp: false,
                    },
                    ChampionSpec {
                        name: "Sona".into(),
                        board_position: 4,
                        items: vec![],
                        final_comp: false,
                    },
                ],
                unknown_slots: vec![21, 25, 26, 5, 6],
                augment_priorities: vec!["RichGetRicher".into(), "FeatherweightFighters".into()],
            },
        ];

        Self {
            champions,
            comps,
            portal_priorities: vec![
                "ScuttlePuddle".into(),
                "GlacialArmory".into(),
                "CrabRave".into(),
            ],
            active: 0,
        }
    }

    /// Load a catalog from a JSON file
    pub fn from_json(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let catalog: CompCatalog = serde_json::from_str(&text)?;
        Ok(catalog)
    }

    /// The currently selected composition
    pub fn active_comp(&self) -> &TeamComp {
        &self.comps[self.active]
    }

    /// Select the next composition, wrapping at the end of the list
    pub fn advance(&mut self) {
        self.active = (self.active + 1) % self.comps.len();
    }

    /// Names the active comp still wants purchased, in comp order
    pub fn champions_to_buy(&self) -> Vec<String> {
        self.active_comp()
            .champions
            .iter()
            .map(|spec| spec.name.clone())
            .collect()
    }

    /// Board slots reserved for unresolved placements, in claim order
    pub fn unknown_board_slots(&self) -> Vec<usize> {
        self.active_comp().unknown_slots.clone()
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.champions.contains_key(name)
    }

    pub fn champion_cost(&self, name: &str) -> Option<u32> {
        self.champions.get(name).map(|info| info.cost)
    }

    pub fn champion_size(&self, name: &str) -> Option<u8> {
        self.champions.get(name).map(|info| info.board_size)
    }

    /// Repair a near-miss text reading to a known champion name
    ///
    /// Matches case-insensitively on containment in either direction,
    /// which is enough to absorb dropped or doubled glyphs at the edges.
    pub fn match_name(&self, text: &str) -> Option<&str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let lower = trimmed.to_lowercase();
        self.champions
            .keys()
            .find(|name| {
                let known = name.to_lowercase();
                known == lower || known.contains(&lower) || lower.contains(&known)
            })
            .map(|name| name.as_str())
    }
}

impl Default for CompCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut catalog = CompCatalog::with_defaults();
        let first = catalog.active_comp().name.clone();
        for _ in 0..catalog.comps.len() {
            catalog.advance();
        }
        assert_eq!(catalog.active_comp().name, first);
    }

    #[test]
    fn test_champions_to_buy_matches_comp_order() {
        let catalog = CompCatalog::with_defaults();
        let names = catalog.champions_to_buy();
        assert_eq!(names[0], "Zed");
        assert_eq!(names.len(), catalog.active_comp().champions.len());
    }

    #[test]
    fn test_match_name_repairs_partial_reading() {
        let catalog = CompCatalog::with_defaults();
        assert_eq!(catalog.match_name("ahri"), Some("Ahri"));
        assert_eq!(catalog.match_name("Nautilu"), Some("Nautilus"));
        assert_eq!(catalog.match_name(""), None);
        assert_eq!(catalog.match_name("Teemo"), None);
    }

    #[test]
    fn test_comp_spec_lookup() {
        let catalog = CompCatalog::with_defaults();
        let spec = catalog.active_comp().spec("Zed").unwrap();
        assert!(spec.final_comp);
        assert_eq!(spec.board_position, 24);
    }
}
