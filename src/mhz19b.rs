use embedded_hal::digital::StatefulOutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_io_async::{Read, ReadReady, Write};
use log::debug;

use crate::calibration::calibrate_zero_point;
use crate::constants::{CMD_READ_GAS, CO2_SETTLE_MS, READ_GAS_REQUEST};
use crate::error::Error;
use crate::frame::{check_command_echo, check_frame, concentration_at};
use crate::serial::{read_frame, write_frame};

/// Represents an MH-Z19B NDIR CO2 sensor.
///
/// # Type Parameters
///
/// * `Serial`: The serial interface used to communicate with the sensor (9600 baud, 8N1).
///   It must implement `embedded_io_async::Read`, `Write` and `ReadReady`.
/// * `Delay`: The timer used to wait for the sensor's answer.
pub struct Mhz19b<Serial, Delay> {
    serial: Serial,
    delay: Delay,
}

impl<S, D> Mhz19b<S, D>
where
    S: Read + ReadReady + Write,
    D: DelayNs,
{
    /// Creates a new `Mhz19b` sensor instance. Nothing is sent to the sensor.
    pub fn new(serial: S, delay: D) -> Self {
        Self { serial, delay }
    }

    /// Reads the CO2 concentration in ppm.
    ///
    /// Returns `None` when the sensor did not answer within 100ms or the answer was
    /// invalid. No retry is attempted; poll again later.
    pub async fn read_co2(&mut self) -> Option<u16> {
        self.try_read_co2()
            .await
            .map_err(|e| debug!("No CO2 reading: {}", e))
            .ok()
    }

    /// Same as [`Mhz19b::read_co2`] but reports why no reading is available.
    pub async fn try_read_co2(&mut self) -> Result<u16, Error> {
        write_frame(&mut self.serial, &READ_GAS_REQUEST).await?;
        self.delay.delay_ms(CO2_SETTLE_MS).await;

        let buffer = read_frame(&mut self.serial).await?;
        let frame = check_frame(&buffer).map_err(|e| {
            log::warn!("Rejected CO2 frame {:02X?}: {}", buffer, e);
            e
        })?;
        check_command_echo(frame, CMD_READ_GAS)?;

        let ppm = concentration_at(frame, 2);
        debug!("CO2: {} ppm", ppm);
        Ok(ppm)
    }

    /// Performs a zero-point calibration, signalling the warm-up on `indicator`.
    ///
    /// This stalls the calling task for about 20 minutes and 5 seconds;
    /// see [`calibrate_zero_point`].
    pub async fn calibrate<P>(&mut self, indicator: &mut P) -> Result<(), Error>
    where
        P: StatefulOutputPin,
    {
        calibrate_zero_point(&mut self.serial, &mut self.delay, indicator).await
    }

    /// Releases the serial interface and the delay.
    pub fn release(self) -> (S, D) {
        (self.serial, self.delay)
    }
}
