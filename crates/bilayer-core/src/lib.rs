//! Bilayer deformation energy around cylindrical inclusions.
//!
//! `curvature`: full boundary-value solution with energy densities
//! `simplified`: closed-form treatment and elastic coefficients
//! `smin`: energy-minimising boundary slope
//! `inclusion`: two-inclusion comparison reports

pub mod curvature;
pub mod inclusion;
pub mod simplified;
pub mod smin;
