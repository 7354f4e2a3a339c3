pub mod amount;
pub mod entropy;
pub mod pressure;
pub mod temperature;
pub mod volume;

#[cfg(test)]
mod amount_test;
#[cfg(test)]
mod volume_test;

pub use amount::{Amount, GAS_CONSTANT};
pub use entropy::Entropy;
pub use pressure::{PASCALS_PER_BAR, Pressure};
pub use temperature::Temperature;
pub use volume::Volume;
