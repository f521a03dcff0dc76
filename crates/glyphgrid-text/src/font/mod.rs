//! Font loading module

mod face;

#[cfg(any(test, feature = "test-font"))]
pub mod synthetic;

pub use face::FontFace;
