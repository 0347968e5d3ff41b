//! Merchant quarter: list your own items for sale, browse the fixed stock.

use crate::env::TablesOracle;
use crate::error::SessionError;
use crate::state::{Inventory, PlayerStats, StatKind};

/// One player-owned sale listing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Listing {
    pub item: String,
    pub quantity: u32,
    pub price: u32,
    /// Unique per listing so duplicates of the same item stay
    /// distinguishable in menus.
    pub nonce: u64,
}

/// The player's stall at the merchant quarter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MerchantQuarter {
    listings: Vec<Listing>,
}

impl MerchantQuarter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// List one unit of a held item for sale. The item leaves the
    /// inventory immediately.
    pub fn list_item(
        &mut self,
        inventory: &mut Inventory,
        item: &str,
        price: u32,
        nonce: u64,
    ) -> Result<(), SessionError> {
        if !inventory.has(item) {
            return Err(SessionError::MissingItem(item.to_string()));
        }
        inventory.remove(item, 1);
        self.listings.push(Listing {
            item: item.to_string(),
            quantity: 1,
            price,
            nonce,
        });
        Ok(())
    }

    pub fn edit_price(&mut self, index: usize, price: u32) -> Result<(), SessionError> {
        let listing = self
            .listings
            .get_mut(index)
            .ok_or(SessionError::InvalidIndex(index))?;
        listing.price = price;
        Ok(())
    }

    /// Withdraw a listing; the item returns to the inventory.
    pub fn cancel(&mut self, inventory: &mut Inventory, index: usize) -> Result<(), SessionError> {
        if index >= self.listings.len() {
            return Err(SessionError::InvalidIndex(index));
        }
        let listing = self.listings.remove(index);
        inventory.add(&listing.item, listing.quantity);
        Ok(())
    }

    /// Buy from the quarter's fixed stock. Payment and delivery are
    /// atomic: on any error nothing changes.
    pub fn buy_stock(
        stats: &mut PlayerStats,
        inventory: &mut Inventory,
        tables: &dyn TablesOracle,
        item: &str,
    ) -> Result<u32, SessionError> {
        let priced = tables
            .merchant_stock()
            .iter()
            .find(|p| p.item == item)
            .ok_or_else(|| SessionError::UnknownItem(item.to_string()))?;
        if stats.oromozi < priced.price {
            return Err(SessionError::InsufficientOromozi {
                needed: priced.price,
                have: stats.oromozi,
            });
        }
        stats.apply_delta(StatKind::Oromozi, -(priced.price as i64));
        inventory.add(&priced.item, 1);
        Ok(priced.price)
    }
}
