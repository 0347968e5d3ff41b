//! Player-owned state: stats, inventory and equipment.

mod equipment;
mod inventory;
mod stats;

pub use equipment::Equipment;
pub use inventory::{Inventory, ItemStack};
pub use stats::{PlayerStats, StatKind, SurvivalTick};
