#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! US geographic lookup tables.
//!
//! The city dataset only carries full state names; the presentation layer
//! wants two-letter abbreviations. See [`states`].

pub mod states;
