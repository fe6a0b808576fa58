use crate::item::{GameId, Item};
use crate::{Error, Result};
use ahash::AHashMap;

/// Immutable, ordered collection of games
///
/// Indexed by id (position) and by name. Names are not unique in the
/// source data; a name resolves to the lowest id carrying it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    by_name: AHashMap<String, GameId>,
}

impl Catalog {
    /// Build from items whose ids are already `0..N` in order.
    pub(crate) fn from_ordered(items: Vec<Item>) -> Self {
        let mut by_name = AHashMap::with_capacity(items.len());
        for item in &items {
            by_name.entry(item.name.clone()).or_insert(item.id);
        }
        Self { items, by_name }
    }

    /// Build from arbitrary items, checking the dense id invariant.
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        if let Some((pos, item)) = items
            .iter()
            .enumerate()
            .find(|(pos, item)| item.id.index() != *pos)
        {
            return Err(Error::InvalidCatalog(format!(
                "item '{}' at position {} has id {}",
                item.name, pos, item.id
            )));
        }
        Ok(Self::from_ordered(items))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, id: GameId) -> Option<&Item> {
        self.items.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// First item with exactly this name
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.by_name.get(name).and_then(|id| self.get(*id))
    }

    pub fn id_of(&self, name: &str) -> Result<GameId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Combined texts in id order
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.combined_text.as_str()).collect()
    }
}
