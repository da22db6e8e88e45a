//! Testing utilities and harness for Lark.

pub mod assertions;
pub mod fixture;

pub use assertions::{assert_approx_eq, assert_rect_approx_eq};
pub use fixture::FixtureField;
