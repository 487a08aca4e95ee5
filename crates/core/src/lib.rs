//! Core library for pokedex
//!
//! This crate implements the **Functional Core** of the pokedex application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`pokedex_core`** (this crate): Pure domain types and transformations with zero I/O
//! - **`pokedex`**: Loading data, reading configuration, and printing (the Imperative Shell)
//!
//! Every function here is deterministic and free of side effects, so it can be
//! tested with plain fixture data.
//!
//! # Module Organization
//!
//! - [`pagination`]: Which page numbers and gaps a pagination bar displays
//! - [`pokemon`]: The Pokémon record and chainable domain filters
//! - [`generation`]: Game generations and their PokeAPI names
//! - [`sort`]: Fields a listing can be ordered by
//! - [`string`]: Capitalization and padding helpers for presentation
//! - [`error`]: Parse and validation errors
//!
//! # Example Usage
//!
//! ```rust
//! use pokedex_core::pagination::{page_numbers, render_line};
//!
//! let markers = page_numbers(12, 20);
//! assert_eq!(render_line(&markers), "1 2 ... 10 11 12 13 14 ... 19 20");
//! ```

pub mod error;
pub mod generation;
pub mod pagination;
pub mod pokemon;
pub mod sort;
pub mod string;
