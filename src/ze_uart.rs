use embedded_hal_async::delay::DelayNs;
use embedded_io_async::{Read, ReadReady, Write};
use log::debug;

use crate::config::{ZeMode, ZeUartConfig};
use crate::constants::{QUERY_SETTLE_MS, READ_GAS_REQUEST};
use crate::error::Error;
use crate::frame::{check_frame, concentration_at, Command};
use crate::serial::{read_frame, write_frame};

// How a reading is obtained, fixed once the mode is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReadStrategy {
    // Send a read request and wait before listening.
    query: bool,
    // Index of the big-endian concentration in the answer.
    offset: usize,
}

impl From<ZeMode> for ReadStrategy {
    fn from(mode: ZeMode) -> Self {
        match mode {
            // Pushed frame: FF 17 04 00 HH LL FS FS CS
            ZeMode::Initiative => ReadStrategy {
                query: false,
                offset: 4,
            },
            // Answer frame: FF 86 HH LL 00 00 00 00 CS
            ZeMode::QueryAnswer => ReadStrategy {
                query: true,
                offset: 2,
            },
        }
    }
}

/// Represents a Winsen ZE-series gas sensor (ZE07-CO, ZE08-CH2O, ZE25-O3, ...) on UART.
///
/// The operating mode is pushed to the sensor once by [`ZeSensor::init`] and never
/// changes afterwards.
pub struct ZeSensor<Serial, Delay> {
    serial: Serial,
    delay: Delay,
    config: ZeUartConfig,
    strategy: ReadStrategy,
}

impl<S, D> ZeSensor<S, D>
where
    S: Read + ReadReady + Write,
    D: DelayNs,
{
    /// Creates a sensor instance and switches the device to `config.mode`.
    ///
    /// The set-mode frame is not acknowledged by the sensor.
    ///
    /// # Returns
    ///
    /// * `Ok(ZeSensor)` once the set-mode frame was sent.
    /// * `Err(Error::WriteFailure)` if the frame could not be written.
    pub async fn init(mut serial: S, delay: D, config: ZeUartConfig) -> Result<Self, Error> {
        debug!("Setting ZE sensor mode to {:?}", config.mode);
        let command = Command::SetMode(config.mode.byte()).to_frame();
        write_frame(&mut serial, &command).await.map_err(|e| {
            log::error!("Failed to set mode {:?} during init: {}", config.mode, e);
            e
        })?;

        Ok(Self {
            serial,
            delay,
            config,
            strategy: ReadStrategy::from(config.mode),
        })
    }

    /// Reads the gas concentration, scaled by the configured multiplier.
    ///
    /// In Initiative mode this never sends anything and returns `None` right away
    /// if the sensor has not pushed a frame yet. In Query/Answer mode a request is
    /// sent and the answer is read 500ms later.
    pub async fn read(&mut self) -> Option<f32> {
        self.try_read()
            .await
            .map_err(|e| debug!("No ZE reading: {}", e))
            .ok()
    }

    /// Same as [`ZeSensor::read`] but reports why no reading is available.
    pub async fn try_read(&mut self) -> Result<f32, Error> {
        if self.strategy.query {
            write_frame(&mut self.serial, &READ_GAS_REQUEST).await?;
            self.delay.delay_ms(QUERY_SETTLE_MS).await;
        }

        let buffer = read_frame(&mut self.serial).await?;
        // The command echo at index 1 is not checked for ZE-series answers.
        let frame = check_frame(&buffer).map_err(|e| {
            log::warn!("Rejected ZE frame {:02X?}: {}", buffer, e);
            e
        })?;

        let raw = concentration_at(frame, self.strategy.offset);
        let value = f32::from(raw) * self.config.multiplier;
        debug!("ZE raw {} -> {}", raw, value);
        Ok(value)
    }

    /// Returns the mode pushed to the sensor at init.
    pub fn mode(&self) -> ZeMode {
        self.config.mode
    }

    /// Returns the scale factor applied to raw readings.
    pub fn multiplier(&self) -> f32 {
        self.config.multiplier
    }

    /// Releases the serial interface and the delay.
    pub fn release(self) -> (S, D) {
        (self.serial, self.delay)
    }
}
