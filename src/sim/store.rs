//! Ordered entity storage
//!
//! The ship always sits at index 0. Removal never happens mid-iteration:
//! callers mark indices, then [`EntityStore::compact`] drops them in one pass.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityView, Kind};

/// Ordered collection of live entities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityStore {
    entities: Vec<Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn extend(&mut self, entities: impl IntoIterator<Item = Entity>) {
        self.entities.extend(entities);
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.entities
    }

    pub fn as_mut_slice(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// The player ship (index 0), if the store has been populated
    pub fn ship(&self) -> Option<&Entity> {
        self.entities.first().filter(|e| e.kind == Kind::Ship)
    }

    pub fn ship_mut(&mut self) -> Option<&mut Entity> {
        self.entities.first_mut().filter(|e| e.kind == Kind::Ship)
    }

    /// Find an entity by id
    pub fn find(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    /// Drop every entity whose flag is set, keeping the order of survivors.
    ///
    /// `removed` is indexed like the store; missing trailing flags mean keep.
    /// Returns how many entities were dropped.
    pub fn compact(&mut self, removed: &[bool]) -> usize {
        let before = self.entities.len();
        let mut index = 0;
        self.entities.retain(|_| {
            let keep = !removed.get(index).copied().unwrap_or(false);
            index += 1;
            keep
        });
        before - self.entities.len()
    }

    /// Render snapshot in store order
    pub fn views(&self) -> Vec<EntityView> {
        self.entities.iter().map(Entity::view).collect()
    }
}
