//! # Capacity Filter
//!
//! Removes options whose category cannot seat the requested party.
//!
//! Filtering never fails. An empty result means no eligible vehicle, not
//! a fault.

use crate::domain::entities::RideOption;

/// Keeps only options that seat at least `passengers` people.
///
/// With `passengers = None` the options are returned unchanged. Relative
/// order of the kept options is preserved.
///
/// # Examples
///
/// ```
/// use ride_aggregator::domain::entities::RideOption;
/// use ride_aggregator::domain::services::filter_by_capacity;
/// use ride_aggregator::domain::value_objects::CarCategory;
///
/// let options = vec![
///     RideOption::new(CarCategory::Executive, 279_000),
///     RideOption::new(CarCategory::PeopleCarrier, 329_000),
/// ];
///
/// let kept = filter_by_capacity(options, Some(6));
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].category(), CarCategory::PeopleCarrier);
/// ```
#[must_use]
pub fn filter_by_capacity(options: Vec<RideOption>, passengers: Option<u32>) -> Vec<RideOption> {
    match passengers {
        None => options,
        Some(required) => options
            .into_iter()
            .filter(|option| option.category().seats(required))
            .collect(),
    }
}
