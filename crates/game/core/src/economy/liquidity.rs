//! Liquidity bank: stake depositable items, earn oromozi yield over time.

use crate::config::GameConfig;
use crate::env::CatalogOracle;
use crate::error::SessionError;
use crate::state::{Inventory, PlayerStats, StatKind};

/// One active stake.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deposit {
    pub item: String,
    pub amount: u32,
    /// Term the depositor chose, used for the upfront yield estimate.
    pub duration_secs: u64,
    /// Session clock reading when the stake was made.
    pub deposited_at_secs: u64,
}

/// What a withdrawal returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawReceipt {
    pub item: String,
    pub amount: u32,
    pub yield_earned: u32,
}

/// Yield in oromozi for an amount staked over an elapsed time.
///
/// Integer throughout: `amount * elapsed * 50 / 86400`, so a full day on
/// 100 staked pays 5000, and sub-second dust rounds down to nothing.
pub fn yield_for(amount: u32, elapsed_secs: u64) -> u32 {
    let raw = amount as u64 * elapsed_secs * GameConfig::LIQUIDITY_RATE / 86_400;
    raw.min(u32::MAX as u64) as u32
}

/// The bank's open deposits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiquidityPool {
    deposits: Vec<Deposit>,
}

impl LiquidityPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deposits(&self) -> &[Deposit] {
        &self.deposits
    }

    /// Stake items from the inventory. Only items flagged as depositable
    /// are accepted. Returns the estimated yield for the chosen term.
    pub fn deposit(
        &mut self,
        inventory: &mut Inventory,
        catalog: &dyn CatalogOracle,
        item: &str,
        amount: u32,
        duration_secs: u64,
        now_secs: u64,
    ) -> Result<u32, SessionError> {
        let def = catalog
            .definition(item)
            .ok_or_else(|| SessionError::UnknownItem(item.to_string()))?;
        if !def.can_deposit {
            return Err(SessionError::NotDepositable(item.to_string()));
        }
        if inventory.count(item) < amount || amount == 0 {
            return Err(SessionError::MissingItem(item.to_string()));
        }

        inventory.remove(item, amount);
        self.deposits.push(Deposit {
            item: item.to_string(),
            amount,
            duration_secs,
            deposited_at_secs: now_secs,
        });
        Ok(yield_for(amount, duration_secs))
    }

    /// Close a deposit: the staked items return to the inventory and the
    /// yield earned over the actual elapsed time is credited as oromozi.
    pub fn withdraw(
        &mut self,
        stats: &mut PlayerStats,
        inventory: &mut Inventory,
        index: usize,
        now_secs: u64,
    ) -> Result<WithdrawReceipt, SessionError> {
        if index >= self.deposits.len() {
            return Err(SessionError::InvalidIndex(index));
        }
        let deposit = self.deposits.remove(index);
        let elapsed = now_secs.saturating_sub(deposit.deposited_at_secs);
        let earned = yield_for(deposit.amount, elapsed);

        inventory.add(&deposit.item, deposit.amount);
        stats.apply_delta(StatKind::Oromozi, earned as i64);
        tracing::debug!(item = %deposit.item, earned, "deposit withdrawn");

        Ok(WithdrawReceipt {
            item: deposit.item,
            amount: deposit.amount,
            yield_earned: earned,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TestEnv;

    #[test]
    fn full_day_on_one_hundred_pays_five_thousand() {
        assert_eq!(yield_for(100, 86_400), 5000);
        // Rounds down, never up.
        assert_eq!(yield_for(1, 1_000), 0);
        assert_eq!(yield_for(0, 86_400), 0);
    }

    #[test]
    fn deposit_and_withdraw_round_trip() {
        let fixture = TestEnv::new();
        let mut pool = LiquidityPool::new();
        let mut inv = Inventory::new();
        let mut stats = PlayerStats::new("Village", 0);
        inv.add("Stick", 100);

        let estimate = pool
            .deposit(&mut inv, &fixture.catalog, "Stick", 100, 86_400, 0)
            .unwrap();
        assert_eq!(estimate, 5000);
        assert_eq!(inv.count("Stick"), 0);
        assert_eq!(pool.deposits().len(), 1);

        let receipt = pool.withdraw(&mut stats, &mut inv, 0, 86_400).unwrap();
        assert_eq!(receipt.yield_earned, 5000);
        assert_eq!(inv.count("Stick"), 100);
        assert_eq!(stats.oromozi, 5000);
        assert!(pool.deposits().is_empty());
    }

    #[test]
    fn early_withdrawal_pays_elapsed_yield_only() {
        let fixture = TestEnv::new();
        let mut pool = LiquidityPool::new();
        let mut inv = Inventory::new();
        let mut stats = PlayerStats::new("Village", 0);
        inv.add("Stick", 100);

        pool.deposit(&mut inv, &fixture.catalog, "Stick", 100, 86_400, 0)
            .unwrap();
        // Half a day elapsed, half the yield.
        let receipt = pool.withdraw(&mut stats, &mut inv, 0, 43_200).unwrap();
        assert_eq!(receipt.yield_earned, 2500);
    }

    #[test]
    fn non_depositable_items_are_rejected() {
        let fixture = TestEnv::new();
        let mut pool = LiquidityPool::new();
        let mut inv = Inventory::new();
        inv.add("Bread", 5);

        let err = pool
            .deposit(&mut inv, &fixture.catalog, "Bread", 5, 1000, 0)
            .unwrap_err();
        assert_eq!(err, SessionError::NotDepositable("Bread".to_string()));
        assert_eq!(inv.count("Bread"), 5);
    }

    #[test]
    fn deposit_requires_enough_held() {
        let fixture = TestEnv::new();
        let mut pool = LiquidityPool::new();
        let mut inv = Inventory::new();
        inv.add("Stick", 3);

        assert!(
            pool.deposit(&mut inv, &fixture.catalog, "Stick", 10, 1000, 0)
                .is_err()
        );
        assert_eq!(inv.count("Stick"), 3);

        let mut stats = PlayerStats::new("Village", 0);
        assert_eq!(
            pool.withdraw(&mut stats, &mut inv, 0, 0),
            Err(SessionError::InvalidIndex(0))
        );
    }
}
