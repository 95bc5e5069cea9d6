//! Encoding and validation of the 9-byte frames shared by MH-Z19B and ZE-series sensors.
//!
//! Layout: `[0xFF, sensor/command, command/data, data x5, checksum]`. The checksum is the
//! two's-complement of the sum of bytes 1 to 7.

use crate::constants::{
    CMD_CALIBRATE_ZERO, CMD_READ_GAS, CMD_SET_MODE, FRAME_LEN, SENSOR_NUMBER, START_BYTE,
};
use crate::error::Error;

/// Both request and response frames are 9 bytes long.
pub type Frame = [u8; FRAME_LEN];

/// Commands understood by the supported sensors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read the gas concentration.
    ReadGasConcentration,
    /// Execute a zero point calibration (MH-Z19B).
    ///
    /// The sensor must have been in clean air (around 400ppm) for 20 minutes.
    CalibrateZero,
    /// Switch the reporting mode (ZE-series), argument is the mode byte.
    SetMode(u8),
}

impl Command {
    /// Op code used for the command in communication with the sensor.
    pub fn op_code(&self) -> u8 {
        match self {
            Self::ReadGasConcentration => CMD_READ_GAS,
            Self::CalibrateZero => CMD_CALIBRATE_ZERO,
            Self::SetMode(_) => CMD_SET_MODE,
        }
    }

    /// The 5 data bytes following the op code.
    pub fn payload(&self) -> [u8; 5] {
        match self {
            Self::SetMode(mode) => [*mode, 0, 0, 0, 0],
            Self::ReadGasConcentration | Self::CalibrateZero => [0; 5],
        }
    }

    /// Serialize the command into a complete request frame.
    pub fn to_frame(&self) -> Frame {
        build_frame(self.op_code(), self.payload())
    }
}

/// Assembles a request frame for `command` and fills in its checksum.
pub fn build_frame(command: u8, payload: [u8; 5]) -> Frame {
    let mut frame: Frame = [
        START_BYTE,
        SENSOR_NUMBER,
        command,
        payload[0],
        payload[1],
        payload[2],
        payload[3],
        payload[4],
        0x00,
    ];
    frame[FRAME_LEN - 1] = checksum(&frame[1..FRAME_LEN - 1]);
    frame
}

/// Sum of `bytes` modulo 256, negated.
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u8, |sum, &b| sum.wrapping_add(b));
    (!sum).wrapping_add(1)
}

/// Checks length, start byte and checksum of a received frame.
///
/// Returns the frame as a fixed-size array on success.
pub fn check_frame(bytes: &[u8]) -> Result<&Frame, Error> {
    let frame: &Frame = bytes
        .try_into()
        .map_err(|_| Error::BadLength(bytes.len()))?;

    if frame[0] != START_BYTE {
        return Err(Error::BadStartByte(frame[0]));
    }

    let expected = checksum(&frame[1..FRAME_LEN - 1]);
    let found = frame[FRAME_LEN - 1];
    if expected != found {
        return Err(Error::BadChecksum { expected, found });
    }

    Ok(frame)
}

/// Returns true iff `bytes` is a well formed frame. Never panics.
pub fn validate_frame(bytes: &[u8]) -> bool {
    check_frame(bytes).is_ok()
}

/// Checks that the byte at index 1 echoes `command`.
pub fn check_command_echo(frame: &Frame, command: u8) -> Result<(), Error> {
    if frame[1] != command {
        return Err(Error::CommandMismatch {
            expected: command,
            found: frame[1],
        });
    }
    Ok(())
}

/// Reads the big-endian 16-bit value stored at `offset` and `offset + 1`.
pub fn concentration_at(frame: &Frame, offset: usize) -> u16 {
    u16::from_be_bytes([frame[offset], frame[offset + 1]])
}
