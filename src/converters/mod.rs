mod measurement;

pub use measurement::{convert, ConversionRule, Quantity, Unit, UnitSystem};
