extern crate nalgebra as na;

mod boundary_margin;
mod common;
mod cube_distance;
mod determinism;
mod errors;
mod sphere_parity;
mod sweep_convergence;
