//! Built-in pipeline stages.

mod clamper;
mod offsetter;
mod reinterpolator;

pub use clamper::QuadClamper;
pub use offsetter::QuadOffsetter;
pub use reinterpolator::QuadReInterpolator;
