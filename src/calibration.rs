//! Zero-point calibration procedure of the MH-Z19B.
//!
//! The whole sequence blocks its caller for a little over 20 minutes: the indicator
//! blinks for ~5.5s, then the sensor must sit in clean air (~400ppm) for 1200s before
//! the calibration frame is sent. Run it on a task that may be stalled that long.

use embedded_hal::digital::StatefulOutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_io_async::Write;
use log::info;

use crate::constants::{
    CALIBRATE_ZERO_REQUEST, CALIBRATION_BLINK_COUNT, CALIBRATION_BLINK_INTERVAL_MS,
    CALIBRATION_WARM_UP_MS,
};
use crate::error::Error;
use crate::serial::write_frame;

/// Runs the zero-point calibration sequence.
///
/// 1. Toggles `indicator` 11 times, 500ms apart, to tell the operator the warm-up starts.
/// 2. Waits 20 minutes.
/// 3. Sends the zero-point calibration frame. The sensor does not acknowledge it.
///
/// # Returns
///
/// * `Err(Error::IndicatorFailure)` if the indicator pin could not be toggled.
/// * `Err(Error::WriteFailure)` if the calibration frame could not be sent.
pub async fn calibrate_zero_point<S, D, P>(
    serial: &mut S,
    delay: &mut D,
    indicator: &mut P,
) -> Result<(), Error>
where
    S: Write,
    D: DelayNs,
    P: StatefulOutputPin,
{
    info!("Please wait for 20 minutes in clean air");
    for _ in 0..CALIBRATION_BLINK_COUNT {
        indicator.toggle().map_err(|_| Error::IndicatorFailure)?;
        delay.delay_ms(CALIBRATION_BLINK_INTERVAL_MS).await;
    }

    info!("Waiting {} seconds", CALIBRATION_WARM_UP_MS / 1000);
    delay.delay_ms(CALIBRATION_WARM_UP_MS).await;

    info!("Starting calibration");
    write_frame(serial, &CALIBRATE_ZERO_REQUEST).await?;
    info!("Calibration command sent");
    Ok(())
}
