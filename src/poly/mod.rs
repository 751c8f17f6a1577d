//! Polynomial algebra over closed intervals
//!
//! The workhorse is the Bernstein form ([`bernstein`]): arithmetic,
//! calculus, division, root geometry and interpolation all stay inside
//! that basis. Classical bases ([`classical`]) and the dual Bernstein
//! basis ([`dual`]) orbit it as conversion sources and projection tools,
//! all sharing the flat coefficient store of [`store`].

pub mod bernstein;
pub mod classical;
pub mod dual;
pub(crate) mod mono;
pub mod store;

pub use bernstein::{
    bernstein_interpolate, bernstein_of_fn, casteljau, integrate_exp,
    integrate_exp_basic, integrate_exp_between, integrate_poly,
    integrate_poly_basic, integrate_poly_between, lobatto, Basic, Bernstein,
};
pub use classical::{ClassicalBasis, ClassicalSum};
pub use dual::BernsteinDualBasis;
pub use store::PolySum;
