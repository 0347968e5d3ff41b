//! Village economy: the bank, the markets, the trading post and the
//! crafting stations.

pub mod crafting;
pub mod liquidity;
pub mod merchant;
pub mod royal;
pub mod trading;

pub use liquidity::{Deposit, LiquidityPool, WithdrawReceipt, yield_for};
pub use merchant::{Listing, MerchantQuarter};
pub use trading::{TradeOffer, TradingPost};
