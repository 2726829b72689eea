//! Input validation and miles-to-kilometers conversion.
//!
//! The single operation here is [`convert`]: it takes the raw textual value
//! of the `milhas` query parameter (possibly absent) and produces either a
//! validated [`Distance`] or a [`ConversionFailure`] carrying the literal
//! rejection message. Logging goes through the `tracing` facade so the
//! routine stays testable without a hosting runtime.

use serde::Serialize;
use tracing::{error, info};

use crate::error::{ConversionFailure, Error, Result};

/// Standard miles-to-kilometers factor.
///
/// The exact constant is part of the wire contract; callers compare computed
/// kilometers against `miles * 1.60934` bit-for-bit.
pub const MILES_TO_KM: f64 = 1.60934;

/// A successfully converted measurement.
///
/// Instances can only be built through [`Distance::from_miles`] or
/// [`convert`], so `miles > 0` and `km == miles * MILES_TO_KM` hold for
/// every value of this type.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Distance {
    miles: f64,
    km: f64,
}

impl Distance {
    /// Construct a distance from an already-parsed miles value.
    ///
    /// Rejects non-finite and non-positive input; the raw text embedded in
    /// the error is the display form of `miles`.
    pub fn from_miles(miles: f64) -> Result<Self> {
        if !miles.is_finite() || miles <= 0.0 {
            return Err(Error::InvalidDistance {
                raw: miles.to_string(),
            });
        }
        Ok(Self {
            miles,
            km: miles * MILES_TO_KM,
        })
    }

    /// Validated input in miles.
    pub fn miles(&self) -> f64 {
        self.miles
    }

    /// Derived value in kilometers.
    pub fn km(&self) -> f64 {
        self.km
    }
}

/// Convert a raw `milhas` query value into a [`Distance`].
///
/// The raw value may be absent, blank, non-numeric, or a stringified number.
/// Every rejection path yields the same [`ConversionFailure`] shape with the
/// original raw text embedded verbatim (empty when the parameter was
/// absent). This function never panics on malformed input.
pub fn convert(raw: Option<&str>) -> std::result::Result<Distance, ConversionFailure> {
    let raw_text = raw.unwrap_or("");
    info!(raw = %raw_text, "distance received for conversion");

    let distance = parse_miles(raw_text).and_then(|miles| Distance::from_miles(miles).ok());

    match distance {
        Some(distance) => {
            info!(
                miles = distance.miles,
                km = distance.km,
                "distance converted"
            );
            Ok(distance)
        }
        None => {
            let failure = ConversionFailure::invalid_distance(raw_text);
            error!(message = %failure.message, "distance validation failed");
            Err(failure)
        }
    }
}

/// Parse the raw text as a JSON number.
///
/// Blank input short-circuits to `None`. Parse failures are logged and also
/// collapse to `None`; the caller reports them with the same message as a
/// missing value. JSON-number semantics reject `NaN`, `inf`, and trailing
/// garbage, matching the behavior of the deployed endpoint this library
/// replaces.
fn parse_miles(raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        return None;
    }

    match serde_json::from_str::<f64>(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            error!(raw = %raw, error = %err, "failed to parse distance in miles");
            None
        }
    }
}
