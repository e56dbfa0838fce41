pub use owned::OwnedLoop;
pub use scalar::Loop;

mod owned;
mod scalar;
