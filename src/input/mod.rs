//! Reading the rectangle dump written by the upstream floorplanner.

/// Record type and line-oriented parser.
pub mod records;
