//! Balance tables oracle: recipes, market catalogs and enemy names.

/// A crafting recipe: consume the ingredients, receive the result.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    pub result: String,
    pub ingredients: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// A three-ingredient gadget recipe discoverable at the tinkerer's lab.
///
/// Matching ignores ingredient order; a failed experiment still consumes
/// its ingredients.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecretRecipe {
    pub result: String,
    pub ingredients: [String; 3],
}

/// An item with a fixed market price.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricedItem {
    pub item: String,
    pub price: u32,
}

/// One shelf of the royal market.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketCategory {
    pub name: String,
    pub items: Vec<PricedItem>,
}

/// Read-only access to balance tables.
pub trait TablesOracle: Send + Sync {
    /// Workshop recipes, in menu order.
    fn recipes(&self) -> &[Recipe];

    /// Undocumented tinkerer recipes.
    fn secret_recipes(&self) -> &[SecretRecipe];

    /// Royal market shelves, in menu order.
    fn royal_market(&self) -> &[MarketCategory];

    /// The merchant quarter's own fixed stock.
    fn merchant_stock(&self) -> &[PricedItem];

    /// Name pool for generated battle enemies.
    fn enemy_names(&self) -> &[String];

    fn recipe(&self, result: &str) -> Option<&Recipe> {
        self.recipes().iter().find(|r| r.result == result)
    }

    /// Match a three-ingredient experiment against the secret recipes,
    /// ignoring ingredient order.
    fn match_secret(&self, ingredients: &[String; 3]) -> Option<&SecretRecipe> {
        let mut tried = ingredients.clone();
        tried.sort();
        self.secret_recipes().iter().find(|recipe| {
            let mut known = recipe.ingredients.clone();
            known.sort();
            known == tried
        })
    }
}
