use crate::constants::{
    MODE_INITIATIVE, MODE_QUERY_ANSWER, SET_MODE_INITIATIVE_CHECKSUM,
    SET_MODE_QUERY_ANSWER_CHECKSUM,
};
use crate::error::Error;

/// Represents the operating mode of a ZE-series sensor on UART.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum ZeMode {
    /// In Initiative mode, the sensor pushes a reading every second.
    Initiative,
    /// In Query/Answer mode, the sensor only reports data when queried.
    QueryAnswer,
}

impl ZeMode {
    /// Returns the payload byte the sensor expects in the set-mode frame.
    pub fn byte(self) -> u8 {
        match self {
            ZeMode::Initiative => MODE_INITIATIVE,
            ZeMode::QueryAnswer => MODE_QUERY_ANSWER,
        }
    }

    /// Returns the checksum of the set-mode frame for this mode.
    pub fn set_mode_checksum(self) -> u8 {
        match self {
            ZeMode::Initiative => SET_MODE_INITIATIVE_CHECKSUM,
            ZeMode::QueryAnswer => SET_MODE_QUERY_ANSWER_CHECKSUM,
        }
    }
}

impl TryFrom<u8> for ZeMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            MODE_INITIATIVE => Ok(ZeMode::Initiative),
            MODE_QUERY_ANSWER => Ok(ZeMode::QueryAnswer),
            other => Err(Error::UnsupportedMode(other)),
        }
    }
}

/// Configuration settings for a ZE-series sensor on UART.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZeUartConfig {
    /// The operating mode pushed to the sensor at init.
    pub mode: ZeMode,
    /// Scale factor applied to every raw concentration (gas specific unit conversion).
    pub multiplier: f32,
}

impl ZeUartConfig {
    /// Creates a new `ZeUartConfig` instance.
    ///
    /// # Arguments
    ///
    /// * `mode` - The `ZeMode` for the sensor.
    /// * `multiplier` - The scale factor applied to raw readings.
    pub fn new(mode: ZeMode, multiplier: f32) -> ZeUartConfig {
        ZeUartConfig { mode, multiplier }
    }
    /// Sets the sensor mode for the configuration.
    pub fn mode(mut self, mode: ZeMode) -> Self {
        self.mode = mode;
        self
    }
    /// Sets the reading multiplier for the configuration.
    pub fn multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }
}

/// Provides default configuration values for a ZE-series UART sensor.
impl Default for ZeUartConfig {
    /// The default configuration uses `Initiative` mode and a multiplier of `1.0`.
    fn default() -> ZeUartConfig {
        ZeUartConfig {
            mode: ZeMode::Initiative,
            multiplier: 1.0,
        }
    }
}

/// Configuration settings for a ZE-series sensor read through its analog output.
///
/// `min_ppm` and `max_ppm` are the concentrations the sensor outputs at 0.4V and 2.0V
/// respectively, as given by the sensor datasheet.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnalogConfig {
    pub min_ppm: f32,
    pub max_ppm: f32,
    /// Number of decimal places kept in the returned reading.
    pub precision: u8,
}

impl AnalogConfig {
    /// Creates a new `AnalogConfig` instance.
    ///
    /// # Arguments
    ///
    /// * `min_ppm` - Concentration at the lowest output voltage.
    /// * `max_ppm` - Concentration at the highest output voltage.
    /// * `precision` - Decimal places to round readings to.
    pub fn new(min_ppm: f32, max_ppm: f32, precision: u8) -> AnalogConfig {
        AnalogConfig {
            min_ppm,
            max_ppm,
            precision,
        }
    }
    /// Sets the concentration range for the configuration.
    pub fn range(mut self, min_ppm: f32, max_ppm: f32) -> Self {
        self.min_ppm = min_ppm;
        self.max_ppm = max_ppm;
        self
    }
    /// Sets the rounding precision for the configuration.
    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }
}
