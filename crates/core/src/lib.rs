//! Core library for cumprod
//!
//! This crate implements the **Functional Core** of the cumprod application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The cumprod project uses a two-crate architecture:
//!
//! - **`cumprod_core`** (this crate): Pure transformation functions with zero I/O
//! - **`cumprod`**: File and stream handling, argument parsing and logging (the Imperative Shell)
//!
//! All functions in this crate are deterministic and free of side effects, so
//! they can be tested with plain fixture data.
//!
//! # Module Organization
//!
//! - [`algorithms`]: The cumulative product transform
//! - [`input`]: Parsing whitespace-delimited numeric text
//! - [`output`]: Rendering results as text or JSON
//! - [`error`]: The error type shared by the modules above
//!
//! # Example Usage
//!
//! ```rust
//! use cumprod_core::algorithms::cumulative_product;
//! use cumprod_core::input::parse_values;
//! use cumprod_core::output::{render, Format, Selection};
//!
//! let values = parse_values("1\n2\n3\n4\n5\n").unwrap();
//! let products = cumulative_product(&values);
//!
//! assert_eq!(products, vec![1.0, 2.0, 6.0, 24.0, 120.0]);
//! assert_eq!(render(&products, Selection::Last, Format::Text), "120\n");
//! ```

pub mod algorithms;
pub mod error;
pub mod input;
pub mod output;

pub use error::Error;
