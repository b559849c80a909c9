#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

#[cfg(test)]
extern crate std;

pub mod category;
pub mod stats;

pub use category::{CharClass, UNICODE_VERSION};
pub use stats::CharacterStats;
