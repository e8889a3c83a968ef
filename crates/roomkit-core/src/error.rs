//! Error handling for RoomKit
//!
//! Provides error types for every layer of the layout engine:
//! - Geometry errors (room polygon construction and replacement)
//! - Catalog errors (item lookup and catalog loading)
//! - Import errors (scene export/import documents)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when a mutation would break a structural invariant of the room
/// polygon. The polygon is left untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Not enough vertices to form a closed room outline
    #[error("Room outline needs at least {minimum} points, got {actual}")]
    TooFewPoints {
        /// The minimum number of vertices required.
        minimum: usize,
        /// The number of vertices supplied.
        actual: usize,
    },

    /// A vertex coordinate is NaN or infinite
    #[error("Point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinitePoint {
        /// Index of the offending vertex.
        index: usize,
        /// The x coordinate.
        x: f64,
        /// The y coordinate.
        y: f64,
    },

    /// Vertex index outside the polygon
    #[error("Vertex index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The current number of vertices.
        len: usize,
    },
}

/// Catalog error type
///
/// Represents failures while loading the product catalog or resolving
/// references into it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// No catalog item carries the requested id
    #[error("Catalog item {id} not found")]
    ItemNotFound {
        /// The id that failed to resolve.
        id: u64,
    },

    /// The catalog document could not be parsed
    #[error("Invalid catalog document: {reason}")]
    InvalidDocument {
        /// The parser's description of the problem.
        reason: String,
    },
}

/// Import error type
///
/// Represents failures while importing a scene export document. Imports are
/// all-or-nothing, so any of these leaves the current scene untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    /// The document is not valid JSON
    #[error("Malformed scene document: {reason}")]
    Malformed {
        /// The parser's description of the problem.
        reason: String,
    },

    /// The top-level value is not a list of records
    #[error("Scene document must be a list of records, found {found}")]
    NotAList {
        /// The JSON type found instead.
        found: String,
    },

    /// A record is not an object or misses a required field
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord {
        /// Position of the record in the list.
        index: usize,
        /// What is wrong with the record.
        reason: String,
    },
}

/// Main error type for RoomKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Import error
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a catalog error
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Error::Catalog(_))
    }

    /// Check if this is an import error
    pub fn is_import_error(&self) -> bool {
        matches!(self, Error::Import(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
