use log::debug;

use crate::config::AnalogConfig;
use crate::constants::{
    ADC_FULL_SCALE, ADC_REFERENCE_VOLTAGE, ANALOG_UNIT_DIVISOR, ANALOG_VOLTAGE_MAX,
    ANALOG_VOLTAGE_MIN,
};
use crate::error::Error;

/// One-shot analog input returning samples normalized to 16 bits.
///
/// `0` corresponds to 0V and `65535` to the 3.3V reference.
#[allow(async_fn_in_trait)]
pub trait AnalogInput {
    type Error: core::fmt::Debug;

    async fn read_u16(&mut self) -> Result<u16, Self::Error>;
}

/// Represents a Winsen ZE-series gas sensor read through its 0.4V-2.0V analog output.
pub struct ZeAnalogSensor<Adc> {
    adc: Adc,
    config: AnalogConfig,
}

impl<A> ZeAnalogSensor<A>
where
    A: AnalogInput,
{
    /// Creates a new `ZeAnalogSensor` instance.
    ///
    /// # Arguments
    ///
    /// * `adc` - The analog input wired to the sensor's DAC output.
    /// * `config` - The concentration range and rounding precision.
    pub fn new(adc: A, config: AnalogConfig) -> Self {
        Self { adc, config }
    }

    /// Reads the gas concentration, rounded to the configured precision.
    ///
    /// Returns `None` if the ADC failed or the voltage is below 0.4V, which usually
    /// means the sensor is warming up or disconnected. Voltages above 2.0V are not
    /// rejected.
    pub async fn read(&mut self) -> Option<f32> {
        self.try_read()
            .await
            .map_err(|e| debug!("No analog reading: {}", e))
            .ok()
    }

    /// Same as [`ZeAnalogSensor::read`] but reports why no reading is available.
    pub async fn try_read(&mut self) -> Result<f32, Error> {
        let sample = self.adc.read_u16().await.map_err(|e| {
            log::error!("ADC read failed: {:?}", e);
            Error::ReadFailure
        })?;
        let voltage = sample_to_voltage(sample);
        debug!("ADC value: {}, voltage: {:.2}", sample, voltage);

        let concentration = voltage_to_concentration(voltage, &self.config)?;
        Ok(round_to(concentration / ANALOG_UNIT_DIVISOR, self.config.precision))
    }

    /// Returns the configuration the sensor was created with.
    pub fn config(&self) -> &AnalogConfig {
        &self.config
    }

    /// Releases the analog input.
    pub fn release(self) -> A {
        self.adc
    }
}

/// Converts a normalized 16-bit sample to volts.
pub fn sample_to_voltage(sample: u16) -> f32 {
    f32::from(sample) * ADC_REFERENCE_VOLTAGE / ADC_FULL_SCALE
}

/// Maps `voltage` linearly from 0.4V-2.0V onto `min_ppm`-`max_ppm`.
///
/// # Returns
///
/// * `Err(Error::OutOfRange)` if the mapped value is negative.
pub fn voltage_to_concentration(voltage: f32, config: &AnalogConfig) -> Result<f32, Error> {
    let concentration = (voltage - ANALOG_VOLTAGE_MIN) * (config.max_ppm - config.min_ppm)
        / (ANALOG_VOLTAGE_MAX - ANALOG_VOLTAGE_MIN)
        + config.min_ppm;

    if concentration < 0.0 {
        log::warn!("Voltage {:.2}V is below the sensor range", voltage);
        return Err(Error::OutOfRange);
    }
    Ok(concentration)
}

// Every f32 at or above 2^24 is already an integer.
const F32_EXACT_INTEGER_LIMIT: f32 = 16_777_216.0;

// Rounds to `precision` decimals, halves away from zero.
fn round_to(value: f32, precision: u8) -> f32 {
    let scale = libm::powf(10.0, f32::from(precision));
    let scaled = value * scale;
    if !scaled.is_finite() || libm::fabsf(scaled) >= F32_EXACT_INTEGER_LIMIT {
        return value;
    }
    libm::roundf(scaled) / scale
}
