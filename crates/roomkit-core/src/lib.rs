//! # RoomKit Core
//!
//! Core types and utilities for RoomKit.
//! Provides the error taxonomy, unit formatting, and the read-only product
//! catalog model the layout engine resolves placed objects against.

pub mod catalog;
pub mod error;
pub mod units;

pub use catalog::{
    Catalog, CatalogId, CatalogItem, Category, ColorVariantRef, NodeId, Section, Subcategory,
    VariantOption, VariantRef,
};

pub use error::{CatalogError, Error, GeometryError, ImportError, Result};

pub use units::{format_angle, format_length, format_price, LengthUnit};
