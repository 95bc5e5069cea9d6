use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The transport had no data when the answer was expected.
    TransportTimeout,
    /// The frame did not have exactly 9 bytes; holds the length found.
    BadLength(usize),
    BadStartByte(u8),
    BadChecksum { expected: u8, found: u8 },
    CommandMismatch { expected: u8, found: u8 },
    /// The analog reading maps below the sensor's measuring range.
    OutOfRange,
    UnsupportedMode(u8),
    ReadFailure,
    WriteFailure,
    IndicatorFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TransportTimeout => write!(f, "no data available from sensor"),
            Error::BadLength(len) => {
                write!(f, "wrong frame length, expected 9 bytes, found {}", len)
            }
            Error::BadStartByte(found) => {
                write!(f, "wrong start byte, expected 0xFF, found {:#04X}", found)
            }
            Error::BadChecksum { expected, found } => write!(
                f,
                "invalid checksum, expected {:#04X}, found {:#04X}",
                expected, found
            ),
            Error::CommandMismatch { expected, found } => write!(
                f,
                "unexpected command echo, expected {:#04X}, found {:#04X}",
                expected, found
            ),
            Error::OutOfRange => write!(f, "reading outside of the sensor range"),
            Error::UnsupportedMode(mode) => write!(f, "unsupported sensor mode {:#04X}", mode),
            Error::ReadFailure => write!(f, "serial read failed"),
            Error::WriteFailure => write!(f, "serial write failed"),
            Error::IndicatorFailure => write!(f, "calibration indicator pin failed"),
        }
    }
}
