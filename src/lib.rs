//! Fetches superhero records from the public superhero catalog and renders
//! them as cards in the terminal.

pub mod api;
pub mod core;
pub mod error;
pub mod types;
pub mod view;

pub use crate::core::HeroClient;
pub use crate::error::{FetchError, PortraitError};
pub use crate::types::{FetchedHero, Hero, Portrait};
