//! Resource generation: supplies, fuel, and cash on hand.

use std::fmt;

use crate::config::Settings;
use crate::error::{DrillError, DrillResult};
use crate::sampler::Sampler;

/// Bounds on the number of distinct items.
pub const ITEM_COUNT_RANGE: (i64, i64) = (5, 20);

/// Bounds on the quantity of each item.
pub const QUANTITY_RANGE: (i64, i64) = (2, 10);

/// Gallons of gas on hand, one decimal place.
pub const GAS_GALLONS_RANGE: (f64, f64) = (8.0, 40.0);

/// Cash on hand in US dollars, two decimal places.
pub const CASH_USD_RANGE: (f64, f64) = (15.0, 500.0);

/// A quantity of one kind of item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceItem {
    /// How many are on hand.
    pub quantity: u32,
    /// Item name, as configured.
    pub name: String,
}

impl fmt::Display for ResourceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.name)
    }
}

/// Everything the group has to work with.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSet {
    /// Items with pairwise distinct names.
    pub items: Vec<ResourceItem>,
    /// Gallons of gas, one decimal place.
    pub gas_gallons: f64,
    /// Cash in US dollars, two decimal places.
    pub cash_usd: f64,
}

/// Generate a resource set from the configured item pool.
///
/// The item count is drawn from [`ITEM_COUNT_RANGE`] and clamped to the pool
/// size, so a small pool yields every configured item instead of an error.
pub fn generate_resources<S: Sampler>(
    settings: &Settings,
    sampler: &mut S,
) -> DrillResult<ResourceSet> {
    let pool = &settings.resources.items;
    if pool.is_empty() {
        return Err(DrillError::EmptyPool);
    }

    let (min_items, max_items) = ITEM_COUNT_RANGE;
    let drawn = sampler.uniform_int(min_items, max_items)? as usize;
    let count = drawn.min(pool.len());
    if count < drawn {
        tracing::warn!(
            drawn,
            available = pool.len(),
            "resource pool smaller than item count; using every item"
        );
    }

    let (min_qty, max_qty) = QUANTITY_RANGE;
    let items = sampler
        .pick_set(pool, count)?
        .into_iter()
        .map(|name| {
            Ok(ResourceItem {
                quantity: sampler.uniform_int(min_qty, max_qty)? as u32,
                name: name.clone(),
            })
        })
        .collect::<DrillResult<Vec<_>>>()?;

    let (min_gas, max_gas) = GAS_GALLONS_RANGE;
    let gas_gallons = sampler.uniform_float(min_gas, max_gas, 1)?;
    let (min_cash, max_cash) = CASH_USD_RANGE;
    let cash_usd = sampler.uniform_float(min_cash, max_cash, 2)?;

    tracing::debug!(items = items.len(), gas_gallons, cash_usd, "generated resources");

    Ok(ResourceSet {
        items,
        gas_gallons,
        cash_usd,
    })
}
