//! Trading post: barter listings between players (or the player and their
//! future self; listings persist for the session).

use crate::error::SessionError;
use crate::state::Inventory;

/// An open barter offer: one unit of `offer` for one unit of `request`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeOffer {
    pub offer: String,
    pub quantity: u32,
    pub request: String,
}

/// The trading post's open offers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradingPost {
    offers: Vec<TradeOffer>,
}

impl TradingPost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offers(&self) -> &[TradeOffer] {
        &self.offers
    }

    /// Post an offer. The offered item is escrowed out of the inventory
    /// immediately.
    pub fn post(
        &mut self,
        inventory: &mut Inventory,
        offer: &str,
        request: &str,
    ) -> Result<(), SessionError> {
        if !inventory.has(offer) {
            return Err(SessionError::MissingItem(offer.to_string()));
        }
        inventory.remove(offer, 1);
        self.offers.push(TradeOffer {
            offer: offer.to_string(),
            quantity: 1,
            request: request.to_string(),
        });
        Ok(())
    }

    /// Accept an offer: hand over the requested item, receive the escrowed
    /// one. Rejected outright if the requested item is not held.
    pub fn accept(
        &mut self,
        inventory: &mut Inventory,
        index: usize,
    ) -> Result<TradeOffer, SessionError> {
        let offer = self
            .offers
            .get(index)
            .ok_or(SessionError::InvalidIndex(index))?;
        if !inventory.has(&offer.request) {
            return Err(SessionError::MissingItem(offer.request.clone()));
        }
        let offer = self.offers.remove(index);
        inventory.remove(&offer.request, 1);
        inventory.add(&offer.offer, offer.quantity);
        Ok(offer)
    }

    /// Withdraw an offer; the escrowed item comes back.
    pub fn cancel(&mut self, inventory: &mut Inventory, index: usize) -> Result<(), SessionError> {
        if index >= self.offers.len() {
            return Err(SessionError::InvalidIndex(index));
        }
        let offer = self.offers.remove(index);
        inventory.add(&offer.offer, offer.quantity);
        Ok(())
    }
}
