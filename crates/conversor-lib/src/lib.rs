//! Conversor de Distancias core library.
//!
//! This crate exposes the validation and conversion routine that turns a raw
//! `milhas` query value into a kilometer measurement. Higher-level consumers
//! (HTTP microservice, Lambda) should only depend on the items exported here
//! instead of reimplementing validation.

#![deny(warnings)]

pub mod convert;
pub mod error;

pub use convert::{convert, Distance, MILES_TO_KM};
pub use error::{ConversionFailure, Error, Result};
