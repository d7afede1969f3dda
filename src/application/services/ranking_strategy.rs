//! # Ranking Strategy
//!
//! Strategies for ordering ride options.
//!
//! This module provides the [`RankingStrategy`] trait and its two
//! implementations:
//! - [`PriceDescendingStrategy`]: every option, most expensive first
//! - [`CheapestPerCategoryStrategy`]: the cheapest option of each category,
//!   most expensive first
//!
//! Both are deterministic. Equal prices keep their input order, so a
//! fixed input always ranks the same way.

use crate::domain::entities::RideOption;
use crate::domain::value_objects::CarCategory;
use std::collections::HashMap;
use std::fmt;

/// Trait for ranking strategies.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Ranks `options`, returning them in presentation order.
    fn rank(&self, options: Vec<RideOption>) -> Vec<RideOption>;

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// Sorts options by price, highest first.
///
/// The sort is stable: options with the same price stay in input order.
#[derive(Debug, Clone, Default)]
pub struct PriceDescendingStrategy;

impl PriceDescendingStrategy {
    /// Creates a new price descending strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RankingStrategy for PriceDescendingStrategy {
    fn rank(&self, mut options: Vec<RideOption>) -> Vec<RideOption> {
        options.sort_by(|a, b| b.price().cmp(&a.price()));
        options
    }

    fn name(&self) -> &'static str {
        "PriceDescending"
    }
}

/// Keeps the cheapest option of each category, then sorts by price,
/// highest first.
///
/// Within a category the first option carrying the minimum price wins.
/// Representatives enter the final stable sort in the order their category
/// first appeared in the input. Categories absent from the input are
/// absent from the output.
#[derive(Debug, Clone, Default)]
pub struct CheapestPerCategoryStrategy;

impl CheapestPerCategoryStrategy {
    /// Creates a new cheapest per category strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Selects one representative per category, in first-seen order.
    #[must_use]
    pub fn cheapest_by_category(options: Vec<RideOption>) -> Vec<RideOption> {
        let mut slots: HashMap<CarCategory, usize> = HashMap::new();
        let mut cheapest: Vec<RideOption> = Vec::new();

        for option in options {
            match slots.get(&option.category()) {
                Some(&slot) => {
                    if let Some(current) = cheapest.get_mut(slot)
                        && option.price() < current.price()
                    {
                        *current = option;
                    }
                }
                None => {
                    slots.insert(option.category(), cheapest.len());
                    cheapest.push(option);
                }
            }
        }

        cheapest
    }
}

impl RankingStrategy for CheapestPerCategoryStrategy {
    fn rank(&self, options: Vec<RideOption>) -> Vec<RideOption> {
        PriceDescendingStrategy.rank(Self::cheapest_by_category(options))
    }

    fn name(&self) -> &'static str {
        "CheapestPerCategory"
    }
}
