//! Royal market: fixed-price shelves organized by category.

use crate::env::TablesOracle;
use crate::error::SessionError;
use crate::state::{Inventory, PlayerStats, StatKind};

/// Buy one item off a royal market shelf.
///
/// Payment and delivery are atomic; any failure leaves both the purse and
/// the inventory untouched.
pub fn purchase(
    stats: &mut PlayerStats,
    inventory: &mut Inventory,
    tables: &dyn TablesOracle,
    category: &str,
    item: &str,
) -> Result<u32, SessionError> {
    let shelf = tables
        .royal_market()
        .iter()
        .find(|c| c.name == category)
        .ok_or_else(|| SessionError::UnknownItem(format!("{category}/{item}")))?;
    let priced = shelf
        .items
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
    tracing::debug!(item, price = priced.price, "royal market purchase");
    Ok(priced.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TestEnv;

    #[test]
    fn purchase_debits_and_delivers() {
        let fixture = TestEnv::new();
        let mut stats = PlayerStats::new("Village", 50);
        let mut inv = Inventory::new();

        let price = purchase(&mut stats, &mut inv, &fixture.tables, "Consumables", "Bread")
            .unwrap();
        assert_eq!(price, 20);
        assert_eq!(stats.oromozi, 30);
        assert_eq!(inv.count("Bread"), 1);
    }

    #[test]
    fn insufficient_funds_change_nothing() {
        let fixture = TestEnv::new();
        let mut stats = PlayerStats::new("Village", 5);
        let mut inv = Inventory::new();

        let err = purchase(&mut stats, &mut inv, &fixture.tables, "Consumables", "Bread")
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::InsufficientOromozi {
                needed: 20,
                have: 5
            }
        );
        assert_eq!(stats.oromozi, 5);
        assert!(inv.is_empty());
    }

    #[test]
    fn unknown_shelf_or_item_is_an_error() {
        let fixture = TestEnv::new();
        let mut stats = PlayerStats::new("Village", 1000);
        let mut inv = Inventory::new();

        assert!(purchase(&mut stats, &mut inv, &fixture.tables, "Weapons", "Bread").is_err());
        assert!(purchase(&mut stats, &mut inv, &fixture.tables, "Consumables", "Cake").is_err());
        assert_eq!(stats.oromozi, 1000);
    }
}
