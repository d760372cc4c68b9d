//! # Collection Service
//!
//! [`Closet`] owns the mutable, insertion-ordered list of garments and is the
//! single entry point for adding, querying, updating and deleting them. It is a
//! thin facade: the logic lives in `commands/*.rs`.
//!
//! Queries never hand out views into the internal list. Every query returns
//! fresh, owned garments, so nothing a caller does with a result can change the
//! collection. The only in-place mutation path is [`Closet::update`].
//!
//! The collection does not deduplicate: adding two garments with the same id is
//! allowed, and id-based operations act on the first match.

use crate::commands::{self, GarmentUpdate, SortKey};
use crate::error::Result;
use crate::model::{AmericanSize, Category, Garment, GarmentForm};
use std::cmp::Ordering;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct Closet {
    garments: Vec<Garment>,
}

impl Closet {
    pub fn new(garments: Vec<Garment>) -> Self {
        Self { garments }
    }

    pub fn garments(&self) -> &[Garment] {
        &self.garments
    }

    pub fn len(&self) -> usize {
        self.garments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }

    pub fn add(&mut self, garment: Garment) {
        tracing::info!(id = %garment.id(), category = %garment.category(), "garment added");
        self.garments.push(garment);
    }

    /// Validates `form` and hands the resulting garment to [`Closet::add`].
    pub fn create(&mut self, form: &GarmentForm) -> Result<Garment> {
        let garment = commands::create::run(form)?;
        self.add(garment.clone());
        Ok(garment)
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<Garment> {
        commands::find::by_id(&self.garments, id)
    }

    pub fn find_by_category(&self, category: Category) -> Vec<Garment> {
        tracing::debug!(%category, "find by category");
        commands::find::by_category(&self.garments, category)
    }

    pub fn find_by_color(&self, color: &str) -> Vec<Garment> {
        tracing::debug!(color, "find by color");
        commands::find::by_color(&self.garments, color)
    }

    pub fn find_by_american_size(&self, size: AmericanSize) -> Vec<Garment> {
        tracing::debug!(%size, "find by american size");
        commands::find::by_american_size(&self.garments, size)
    }

    /// Garments with `min < european size <= max`; fails when `min >= max`.
    pub fn find_by_european_size_range(&self, min: i32, max: i32) -> Result<Vec<Garment>> {
        tracing::debug!(min, max, "find by european size range");
        commands::find::by_european_size_range(&self.garments, min, max)
    }

    pub fn sorted_default(&self) -> Vec<Garment> {
        commands::sort::sorted_default(&self.garments)
    }

    pub fn sorted_by<F>(&self, compare: F) -> Vec<Garment>
    where
        F: FnMut(&Garment, &Garment) -> Ordering,
    {
        commands::sort::sorted_by(&self.garments, compare)
    }

    pub fn sorted_by_key(&self, key: SortKey) -> Vec<Garment> {
        self.sorted_by(|a, b| key.compare(a, b))
    }

    /// Identifiers with their category, ordered by identifier.
    pub fn identifiers(&self) -> Vec<(Uuid, Category)> {
        let mut ids: Vec<_> = self
            .garments
            .iter()
            .map(|g| (g.id(), g.category()))
            .collect();
        ids.sort_by_key(|(id, _)| *id);
        ids
    }

    /// Applies `update` to the garment with `id`; `Ok(false)` when it doesn't exist.
    pub fn update(&mut self, id: Uuid, update: &GarmentUpdate) -> Result<bool> {
        let updated = commands::update::run(&mut self.garments, id, update)?;
        if updated {
            tracing::info!(%id, change = %update, "garment updated");
        } else {
            tracing::debug!(%id, "update target not found");
        }
        Ok(updated)
    }

    /// Removes the first garment with `id`. `None` counts as not found.
    pub fn delete_by_id(&mut self, id: Option<Uuid>) -> bool {
        let deleted = commands::delete::run(&mut self.garments, id);
        if deleted {
            tracing::info!(id = ?id, "garment deleted");
        }
        deleted
    }
}
