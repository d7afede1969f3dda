//! # Response Normalizer
//!
//! Turns a [`RawResponse`] into a [`Ride`].
//!
//! Every failure collapses to [`Ride::empty`]: a client error, an outage,
//! a timeout and an undecodable body all look like "no options from this
//! supplier". Inside a decodable body, individual options with an unknown
//! `car_type`, or a price that is not a non-negative integer, are dropped
//! without affecting the rest.

use crate::domain::entities::{Ride, RideOption};
use crate::domain::value_objects::CarCategory;
use crate::infrastructure::suppliers::traits::RawResponse;
use serde::Deserialize;
use tracing::{debug, warn};

/// Supplier response body.
#[derive(Debug, Deserialize)]
struct RidePayload {
    #[serde(default)]
    supplier_id: Option<String>,
    #[serde(default)]
    pickup: Option<String>,
    #[serde(default)]
    dropoff: Option<String>,
    #[serde(default)]
    options: Option<Vec<OptionPayload>>,
}

/// One entry of the `options` array.
#[derive(Debug, Deserialize)]
struct OptionPayload {
    car_type: String,
    price: serde_json::Number,
}

impl OptionPayload {
    fn into_option(self) -> Option<RideOption> {
        let category = match self.car_type.parse::<CarCategory>() {
            Ok(category) => category,
            Err(_) => {
                debug!(car_type = %self.car_type, "dropping option with unknown car type");
                return None;
            }
        };
        let Some(price) = self.price.as_u64() else {
            debug!(car_type = %self.car_type, price = %self.price, "dropping option with out of range price");
            return None;
        };
        Some(RideOption::new(category, price))
    }
}

/// Normalizes a gateway outcome into a ride.
///
/// Pure: the same input always produces the same ride.
///
/// # Examples
///
/// ```
/// use ride_aggregator::application::services::normalizer::normalize;
/// use ride_aggregator::infrastructure::suppliers::traits::RawResponse;
///
/// let body = r#"{"supplier_id":"dave","pickup":"1,2","dropoff":"3,4",
///                "options":[{"car_type":"EXECUTIVE","price":279000}]}"#;
/// let ride = normalize(&RawResponse::Success(body.to_string()));
/// assert_eq!(ride.options().len(), 1);
///
/// assert!(normalize(&RawResponse::Timeout).is_empty());
/// ```
#[must_use]
pub fn normalize(raw: &RawResponse) -> Ride {
    match raw {
        RawResponse::Success(body) => decode_ride(body),
        RawResponse::ClientError => {
            warn!("supplier rejected the request as invalid");
            Ride::empty()
        }
        RawResponse::ServerUnavailable => {
            warn!("supplier is unavailable");
            Ride::empty()
        }
        RawResponse::Timeout => {
            warn!("supplier request timed out");
            Ride::empty()
        }
    }
}

/// Decodes a success body, falling back to the empty ride.
fn decode_ride(body: &str) -> Ride {
    let payload = match serde_json::from_str::<RidePayload>(body) {
        Ok(payload) => payload,
        Err(error) => {
            warn!(%error, "supplier payload is invalid");
            return Ride::empty();
        }
    };

    let options = payload
        .options
        .unwrap_or_default()
        .into_iter()
        .filter_map(OptionPayload::into_option)
        .collect();

    Ride::new(payload.supplier_id, payload.pickup, payload.dropoff, options)
}
