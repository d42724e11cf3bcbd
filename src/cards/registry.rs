//! Card registry: the pool every deck draws its ids from.
//!
//! `CardRegistry` stores cards by `CardId` and remembers insertion order so
//! callers get a stable enumeration. `SharedRegistry` is the handle decks
//! hold: one pool, many sequences (e.g., a "game" deck and a "player" deck).

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::card::Card;
use super::id::CardId;
use super::image::ImgData;

/// Registry of cards keyed by id.
///
/// ## Example
///
/// ```
/// use memo_deck::cards::{CardRegistry, ImgData};
///
/// let mut registry = CardRegistry::new();
/// let ids = registry.load(&[ImgData::default(), ImgData::default()]);
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.ids(), ids.as_slice());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Rc<Card>>,
    /// Keys in insertion order.
    order: Vec<CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// A colliding id replaces the stored card and keeps its original
    /// position. Returns the replaced card, if any.
    pub fn register(&mut self, card: Card) -> Option<Rc<Card>> {
        let id = card.id().clone();
        let replaced = self.cards.insert(id.clone(), Rc::new(card));
        if replaced.is_some() {
            warn!(%id, "card id collision, replacing registered card");
        } else {
            self.order.push(id);
        }
        replaced
    }

    /// Build and register one card per record.
    ///
    /// Returns the generated ids in record order.
    pub fn load(&mut self, records: &[ImgData]) -> Vec<CardId> {
        let ids: Vec<CardId> = records
            .iter()
            .map(|record| {
                let card = Card::new(record);
                let id = card.id().clone();
                self.register(card);
                id
            })
            .collect();
        debug!(loaded = ids.len(), total = self.len(), "loaded cards into registry");
        ids
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Rc<Card>> {
        self.cards.get(id)
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Registered ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[CardId] {
        &self.order
    }

    /// Iterate over cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Card>> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.order.clear();
    }
}

/// Shared handle to a `CardRegistry`.
///
/// Cloning the handle shares the same pool. The handle is single-threaded
/// (`!Send`), so writes to the pool are serialized by construction.
#[derive(Clone, Debug, Default)]
pub struct SharedRegistry(Rc<RefCell<CardRegistry>>);

impl SharedRegistry {
    /// Create a handle to a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and register one card per record. See `CardRegistry::load`.
    pub fn load(&self, records: &[ImgData]) -> Vec<CardId> {
        self.0.borrow_mut().load(records)
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<Rc<Card>> {
        self.0.borrow().get(id).cloned()
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.0.borrow().contains(id)
    }

    /// Registered ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.0.borrow().ids().to_vec()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Run `f` with read access to the registry.
    pub fn with<T>(&self, f: impl FnOnce(&CardRegistry) -> T) -> T {
        f(&self.0.borrow())
    }

    /// Remove every card from the shared pool.
    ///
    /// Sequences already holding ids are left untouched.
    pub fn reset(&self) {
        let mut registry = self.0.borrow_mut();
        debug!(removed = registry.len(), "resetting card registry");
        registry.clear();
    }

    /// Check if two handles share the same pool.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
