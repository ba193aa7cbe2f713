//! Numerical primitives for SCPN Bilayer Core.

pub mod bessel;
pub mod complex;
pub mod minimize;
pub mod quadrature;
