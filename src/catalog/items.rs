//! Item recipe catalog
//!
//! A "full" item combines exactly two component items. The engine only
//! needs the forward mapping (full item -> its two components) to run the
//! crafting chain matcher.

use ahash::AHashMap;

use crate::core::types::ItemId;

/// The extra-board-slot trinket, handled specially by the item engine
pub const TACTICIANS_CROWN: &str = "TacticiansCrown";

/// Recipe table for completed items
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    recipes: AHashMap<ItemId, (ItemId, ItemId)>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog covering the standard component/full item set
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        let recipes: &[(&str, &str, &str)] = &[
            ("Deathblade", "BfSword", "BfSword"),
            ("GiantSlayer", "BfSword", "RecurveBow"),
            ("HextechGunblade", "BfSword", "NeedlesslyLargeRod"),
            ("SpearOfShojin", "BfSword", "TearOfTheGoddess"),
            ("EdgeOfNight", "BfSword", "ChainVest"),
            ("Bloodthirster", "BfSword", "NegatronCloak"),
            ("SteraksGage", "BfSword", "GiantsBelt"),
            ("InfinityEdge", "BfSword", "SparringGloves"),
            ("RapidFirecannon", "RecurveBow", "RecurveBow"),
            ("GuinsoosRageblade", "RecurveBow", "NeedlesslyLargeRod"),
            ("StatikkShiv", "RecurveBow", "TearOfTheGoddess"),
            ("TitansResolve", "RecurveBow", "ChainVest"),
            ("RunaansHurricane", "RecurveBow", "NegatronCloak"),
            ("RabadonsDeathcap", "NeedlesslyLargeRod", "NeedlesslyLargeRod"),
            ("ArchangelsStaff", "NeedlesslyLargeRod", "TearOfTheGoddess"),
            ("Morellonomicon", "NeedlesslyLargeRod", "GiantsBelt"),
            ("JeweledGauntlet", "NeedlesslyLargeRod", "SparringGloves"),
            ("BlueBuff", "TearOfTheGoddess", "TearOfTheGoddess"),
            ("ProtectorsVow", "TearOfTheGoddess", "ChainVest"),
            ("Redemption", "TearOfTheGoddess", "GiantsBelt"),
            ("BrambleVest", "ChainVest", "ChainVest"),
            ("GargoyleStoneplate", "ChainVest", "NegatronCloak"),
            ("SunfireCape", "ChainVest", "GiantsBelt"),
            ("DragonsClaw", "NegatronCloak", "NegatronCloak"),
            ("WarmogsArmor", "GiantsBelt", "GiantsBelt"),
            ("ThiefsGloves", "SparringGloves", "SparringGloves"),
            (TACTICIANS_CROWN, "Spatula", "Spatula"),
        ];
        for (full, a, b) in recipes {
            catalog.insert(full, a, b);
        }
        catalog
    }

    pub fn insert(&mut self, full: &str, first: &str, second: &str) {
        self.recipes
            .insert(full.to_string(), (first.to_string(), second.to_string()));
    }

    /// True if the item is a completed item rather than a component
    pub fn is_full_item(&self, item: &str) -> bool {
        self.recipes.contains_key(item)
    }

    /// Components of a full item, if it has a recipe
    pub fn components_of(&self, full: &str) -> Option<(&ItemId, &ItemId)> {
        self.recipes.get(full).map(|(a, b)| (a, b))
    }

    /// Given a component held in hand, the component still needed to
    /// finish `full` - `None` if the component is not part of the recipe
    pub fn remaining_component(&self, full: &str, held: &str) -> Option<ItemId> {
        let (first, second) = self.recipes.get(full)?;
        if held == first {
            Some(second.clone())
        } else if held == second {
            Some(first.clone())
        } else {
            None
        }
    }
}
