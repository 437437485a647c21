//! Analog input access

/// Analog channel number (board numbering)
pub type AnalogChannel = u8;

/// Resolution the drivers assume for ratiometric readings
pub const ADC_RESOLUTION_BITS: u8 = 12;

/// Analog sampling bank
pub trait AnalogBank {
    /// Request a conversion resolution in bits
    ///
    /// Chips with a fixed-resolution converter may ignore this.
    fn set_resolution(&mut self, bits: u8);

    /// Take one sample from a channel
    fn read_analog(&mut self, channel: AnalogChannel) -> u16;
}
