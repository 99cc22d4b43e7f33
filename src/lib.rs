//! # vorometric
//!
//! `vorometric` is a Rust library for generalized 2D Voronoi diagrams, designed to be used in
//! Rust as well as compiled to WebAssembly (WASM). Instead of constructing cells exactly, it
//! samples the canvas on a regular lattice and groups the samples by their nearest sites, which
//! makes any distance metric and any diagram order equally easy to support.
//!
//! ## Features
//!
//! - **Metrics**: Euclidean, Manhattan, Minkowski-p and a bounded-rectangle Hilbert metric.
//! - **Order-k regions**: Regions keyed by the set of the `k` nearest sites, not just the
//!   nearest one.
//! - **Layouts**: Regular polygon, circle, grid and random site generators for quick setups.
//! - **WASM-first**: Built with `wasm-bindgen`, lattice rows are classified in parallel with
//!   `rayon`.
//!
//! ## Example
//!
//! See the `demos/` directory for an SVG rendering of an order-2 diagram.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`Diagram`] struct, which owns the site list and keeps the
//! [`Regions`] up to date. The pure [`classify`] and [`distance`] functions can be used directly.

mod bounds;
mod classifier;
mod diagram;
mod error;
pub mod generators;
mod geometry;
mod metric;
pub mod wasm;

pub use bounds::Canvas;
pub use bounds::DEFAULT_HEIGHT;
pub use bounds::DEFAULT_WIDTH;
pub use classifier::classify;
pub use classifier::clamp_order;
pub use classifier::effective_resolution;
pub use classifier::nearest_site;
pub use classifier::nearest_sites;
pub use classifier::Region;
pub use classifier::RegionKey;
pub use classifier::Regions;
pub use classifier::DEFAULT_RESOLUTION;
pub use classifier::MIN_RESOLUTION;
pub use classifier::MIN_SITES_FOR_REGIONS;
pub use diagram::Diagram;
pub use diagram::DiagramConfig;
pub use error::VoronoiError;
pub use error::VoronoiResult;
pub use geometry::centroid;
pub use geometry::convex_hull;
pub use geometry::polygon_area;
pub use geometry::Point;
pub use metric::distance;
pub use metric::MetricConfig;
pub use metric::MetricKind;
pub use metric::DEFAULT_P_VALUE;
