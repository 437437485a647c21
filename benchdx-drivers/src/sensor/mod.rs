//! Temperature sensors

pub mod thermistor;

pub use thermistor::Thermistor;
