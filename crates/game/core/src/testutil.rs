//! Shared fixtures for unit tests: a small fixed content set and
//! controllable RNG oracles.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::clock::TimeOfDay;
use crate::env::{
    CatalogOracle, CombatEffects, Env, ItemDefinition, MarketCategory, NarrativeOracle,
    NarrativePrompt, PcgRng, PricedItem, Rarity, Recipe, RngOracle, SecretRecipe, TablesOracle,
};
use crate::state::StatKind;

/// RNG oracle that returns one constant regardless of seed.
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// RNG oracle that replays a script of values in call order, then falls
/// back to PCG output.
pub struct ScriptedRng {
    script: Mutex<Vec<u32>>,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        let mut script: Vec<u32> = values.into_iter().collect();
        script.reverse();
        Self {
            script: Mutex::new(script),
        }
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, seed: u64) -> u32 {
        match self.script.lock() {
            Ok(mut script) => script.pop().unwrap_or_else(|| PcgRng.next_u32(seed)),
            Err(_) => PcgRng.next_u32(seed),
        }
    }
}

pub struct TestCatalog {
    zones: BTreeMap<String, Vec<ItemDefinition>>,
}

impl TestCatalog {
    fn new() -> Self {
        let mut zones = BTreeMap::new();
        zones.insert(
            "Outer Grasslands".to_string(),
            vec![
                item("Stick", |i| i.can_deposit = true),
                item("Cloth", |i| i.can_deposit = true),
                item("Wood", |i| i.can_deposit = true),
                item("Iron Ore", |i| i.can_deposit = true),
                item("Bread", |i| {
                    i.stat_effects.insert(StatKind::Hunger, 30);
                }),
                item("Water", |i| {
                    i.stat_effects.insert(StatKind::Thirst, 30);
                }),
                item("Healing Medicine", |i| {
                    i.stat_effects.insert(StatKind::Health, 30);
                }),
                item("Iron Sword", |i| {
                    i.combat_effects = CombatEffects {
                        attack: 5,
                        evasion: 0,
                        defense: 0,
                    };
                }),
                item("Wooden Armor", |i| {
                    i.combat_effects = CombatEffects {
                        attack: 0,
                        evasion: 0,
                        defense: 3,
                    };
                    i.resist.insert("physical".to_string(), 5);
                }),
                item("Ember Cloak", |i| {
                    i.resist.insert("fire".to_string(), 10);
                }),
                item("Dragon Scale", |i| {
                    i.resist.insert("fire".to_string(), 50);
                }),
                item("Sun Shard", |i| i.rarity = Rarity::Rare),
            ],
        );
        zones.insert(
            "Village".to_string(),
            vec![item("Bread", |i| {
                i.stat_effects.insert(StatKind::Hunger, 30);
            })],
        );
        Self { zones }
    }
}

fn item(name: &str, build: impl FnOnce(&mut ItemDefinition)) -> ItemDefinition {
    let mut def = ItemDefinition {
        name: name.to_string(),
        ..ItemDefinition::default()
    };
    build(&mut def);
    def
}

impl CatalogOracle for TestCatalog {
    fn zone_names(&self) -> Vec<&str> {
        self.zones.keys().map(String::as_str).collect()
    }

    fn zone_items(&self, zone: &str) -> &[ItemDefinition] {
        self.zones.get(zone).map_or(&[], Vec::as_slice)
    }
}

pub struct TestNarrative {
    prologues: Vec<String>,
    prompts: Vec<NarrativePrompt>,
}

impl TestNarrative {
    fn new() -> Self {
        Self {
            prologues: vec!["The grass whispers around you.".to_string()],
            prompts: vec![
                NarrativePrompt {
                    prompt: "A stranger waves you over.".to_string(),
                    options: vec!["Share your bread".to_string(), "Walk away".to_string()],
                    outcomes: vec![
                        "(-20 hunger)(+10 exp) The stranger thanks you.".to_string(),
                        "(+5 exp) You keep moving.".to_string(),
                    ],
                    time_of_day: None,
                },
                NarrativePrompt {
                    prompt: "Fireflies gather at dusk.".to_string(),
                    options: vec!["Follow them".to_string()],
                    outcomes: vec!["(+Loot)(+5 exp) They lead you to a cache.".to_string()],
                    time_of_day: Some(TimeOfDay::Evening),
                },
            ],
        }
    }
}

impl NarrativeOracle for TestNarrative {
    fn prologues(&self, _zone: &str) -> &[String] {
        &self.prologues
    }

    fn prompts(&self, _zone: &str) -> &[NarrativePrompt] {
        &self.prompts
    }
}

pub struct TestTables {
    recipes: Vec<Recipe>,
    secrets: Vec<SecretRecipe>,
    royal: Vec<MarketCategory>,
    stock: Vec<PricedItem>,
    enemies: Vec<String>,
}

impl TestTables {
    fn new() -> Self {
        Self {
            recipes: vec![Recipe {
                result: "Iron Sword".to_string(),
                ingredients: vec!["Iron Ore".to_string(), "Wood".to_string()],
                description: "A sturdy blade.".to_string(),
            }],
            secrets: vec![SecretRecipe {
                result: "Wind-Up Toy".to_string(),
                ingredients: [
                    "Wood".to_string(),
                    "Thread".to_string(),
                    "Copper Ore".to_string(),
                ],
            }],
            royal: vec![MarketCategory {
                name: "Consumables".to_string(),
                items: vec![PricedItem {
                    item: "Bread".to_string(),
                    price: 20,
                }],
            }],
            stock: vec![PricedItem {
                item: "Iron Sword".to_string(),
                price: 500,
            }],
            enemies: vec!["Goblin".to_string(), "Wolf".to_string()],
        }
    }
}

impl TablesOracle for TestTables {
    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    fn secret_recipes(&self) -> &[SecretRecipe] {
        &self.secrets
    }

    fn royal_market(&self) -> &[MarketCategory] {
        &self.royal
    }

    fn merchant_stock(&self) -> &[PricedItem] {
        &self.stock
    }

    fn enemy_names(&self) -> &[String] {
        &self.enemies
    }
}

static PCG: PcgRng = PcgRng;

/// Owns one of everything a session needs.
pub struct TestEnv {
    pub catalog: TestCatalog,
    pub narrative: TestNarrative,
    pub tables: TestTables,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            catalog: TestCatalog::new(),
            narrative: TestNarrative::new(),
            tables: TestTables::new(),
        }
    }

    /// Env with real PCG randomness.
    pub fn env(&self) -> Env<'_> {
        Env::new(&self.catalog, &self.narrative, &self.tables, &PCG)
    }

    /// Env with a caller-controlled RNG oracle.
    pub fn env_with_rng<'a>(&'a self, rng: &'a dyn RngOracle) -> Env<'a> {
        Env::new(&self.catalog, &self.narrative, &self.tables, rng)
    }
}
