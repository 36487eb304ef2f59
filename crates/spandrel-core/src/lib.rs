//! Spandrel Core Types and Definitions
//!
//! This crate provides the foundational types for the Spandrel bridge drawing
//! generator. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Coordinate mapping**: Chainage/level to drawing-space transforms
//!   ([`mapper`] module)
//! - **Colors**: AutoCAD Color Index handling ([`color`] module)
//! - **Layers**: The fixed drawing layer registry ([`layer`] module)
//! - **Draw**: Drawing primitives and layered drawings ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod layer;
pub mod mapper;
