//! Crafting workshop and tinkerer's lab.
//!
//! The workshop follows published recipes. The lab is riskier: three
//! ingredients go in, and unless they match an undocumented recipe the
//! experiment fails and the ingredients are gone.

use crate::env::{Env, TablesOracle, compute_seed, random_loot_for_zone};
use crate::error::SessionError;
use crate::state::Inventory;

/// Craft a recipe by name, consuming its ingredients.
pub fn craft(
    inventory: &mut Inventory,
    tables: &dyn TablesOracle,
    result: &str,
) -> Result<(), SessionError> {
    let recipe = tables
        .recipe(result)
        .ok_or_else(|| SessionError::UnknownRecipe(result.to_string()))?;

    let missing: Vec<_> = recipe
        .ingredients
        .iter()
        .filter(|ing| !inventory.has(ing))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(SessionError::MissingIngredients {
            recipe: result.to_string(),
            missing: missing.join(", "),
        });
    }

    for ing in &recipe.ingredients {
        inventory.remove(ing, 1);
    }
    inventory.add(&recipe.result, 1);
    tracing::debug!(result, "crafted");
    Ok(())
}

/// Run a three-ingredient experiment at the tinkerer's lab.
///
/// Ingredients are always consumed. Returns the invented gadget's name on
/// a match, `None` when the combination is a dud.
pub fn experiment(
    inventory: &mut Inventory,
    tables: &dyn TablesOracle,
    ingredients: &[String; 3],
) -> Result<Option<String>, SessionError> {
    // Holding three of the same item counts; the check is per-unit.
    let mut counted = Inventory::new();
    for ing in ingredients {
        counted.add(ing, 1);
    }
    for stack in counted.stacks() {
        if inventory.count(&stack.name) < stack.quantity {
            return Err(SessionError::MissingItem(stack.name.clone()));
        }
    }

    for ing in ingredients {
        inventory.remove(ing, 1);
    }

    match tables.match_secret(ingredients) {
        Some(recipe) => {
            inventory.add(&recipe.result, 1);
            tracing::debug!(result = %recipe.result, "experiment succeeded");
            Ok(Some(recipe.result.clone()))
        }
        None => Ok(None),
    }
}

/// Break a held item down; the scrap turns into one random draw from the
/// current zone's loot table, which may be nothing at all.
pub fn salvage(
    inventory: &mut Inventory,
    env: &Env,
    zone: &str,
    level: u32,
    item: &str,
    seed: u64,
) -> Result<Option<String>, SessionError> {
    if !inventory.has(item) {
        return Err(SessionError::MissingItem(item.to_string()));
    }
    inventory.remove(item, 1);
    let scrap = random_loot_for_zone(env, zone, level, compute_seed(seed, 0, 0));
    if let Some(found) = &scrap {
        inventory.add(found, 1);
    }
    Ok(scrap)
}

/// Material consumed by a repair.
const REPAIR_MATERIAL: &str = "Wood";

/// Patch up a held item for one unit of wood. The simulation does not
/// track durability; repair exists for its material sink.
pub fn repair(inventory: &mut Inventory, item: &str) -> Result<(), SessionError> {
    if !inventory.has(item) {
        return Err(SessionError::MissingItem(item.to_string()));
    }
    if !inventory.has(REPAIR_MATERIAL) {
        return Err(SessionError::MissingIngredients {
            recipe: format!("repair {item}"),
            missing: REPAIR_MATERIAL.to_string(),
        });
    }
    inventory.remove(REPAIR_MATERIAL, 1);
    Ok(())
}
