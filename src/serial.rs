use embedded_io_async::{Read, ReadReady, Write};
use log::debug;

use crate::constants::FRAME_LEN;
use crate::error::Error;
use crate::frame::Frame;

// Writes a complete frame to the serial port and waits until it is sent.
pub(crate) async fn write_frame<S: Write>(serial: &mut S, frame: &Frame) -> Result<(), Error> {
    debug!("Executing command: {:02X?}", frame);
    serial.write_all(frame).await.map_err(|_| {
        log::error!("Failed to write frame {:02X?}", frame);
        Error::WriteFailure
    })?;
    serial.flush().await.map_err(|_| Error::WriteFailure)?;
    Ok(())
}

// Reads up to 9 bytes without waiting on an idle line.
//
// Returns `TransportTimeout` when nothing is pending, and `BadLength` when the
// sensor stopped sending before a full frame arrived. The frame is not validated.
pub(crate) async fn read_frame<S: Read + ReadReady>(serial: &mut S) -> Result<Frame, Error> {
    if !ready(serial)? {
        return Err(Error::TransportTimeout);
    }

    let mut frame = [0u8; FRAME_LEN];
    let mut filled = 0;
    while filled < FRAME_LEN {
        let n = serial.read(&mut frame[filled..]).await.map_err(|_| {
            log::error!("Serial read error after {} bytes", filled);
            Error::ReadFailure
        })?;
        filled += n;
        if n == 0 || (filled < FRAME_LEN && !ready(serial)?) {
            break;
        }
    }

    if filled < FRAME_LEN {
        log::warn!(
            "Short frame ({} bytes): {:02X?}",
            filled,
            &frame[..filled]
        );
        return Err(Error::BadLength(filled));
    }

    debug!("Received frame: {:02X?}", frame);
    Ok(frame)
}

fn ready<S: ReadReady>(serial: &mut S) -> Result<bool, Error> {
    serial.read_ready().map_err(|_| Error::ReadFailure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::READ_GAS_REQUEST;
    use crate::mock::MockSerial;

    #[tokio::test]
    async fn idle_line_reports_timeout() {
        let mut serial = MockSerial::new();
        assert_eq!(read_frame(&mut serial).await, Err(Error::TransportTimeout));
    }

    #[tokio::test]
    async fn partial_frame_is_too_short() {
        let mut serial = MockSerial::new();
        serial.inject_rx_data(&[0xFF, 0x86, 0x02]);
        assert_eq!(read_frame(&mut serial).await, Err(Error::BadLength(3)));
    }

    #[tokio::test]
    async fn frame_split_across_reads_is_reassembled() {
        let mut serial = MockSerial::new().with_chunk_size(4);
        serial.inject_rx_data(&READ_GAS_REQUEST);
        assert_eq!(read_frame(&mut serial).await, Ok(READ_GAS_REQUEST));
    }

    #[tokio::test]
    async fn only_one_frame_is_consumed() {
        let mut serial = MockSerial::new();
        serial.inject_rx_data(&READ_GAS_REQUEST);
        serial.inject_rx_data(&[0xAA]);
        assert_eq!(read_frame(&mut serial).await, Ok(READ_GAS_REQUEST));
        assert_eq!(serial.rx_pending(), 1);
    }

    #[tokio::test]
    async fn read_failure_is_reported() {
        let mut serial = MockSerial::new();
        serial.inject_rx_data(&READ_GAS_REQUEST);
        serial.set_read_error();
        assert_eq!(read_frame(&mut serial).await, Err(Error::ReadFailure));
    }

    #[tokio::test]
    async fn write_failure_is_reported() {
        let mut serial = MockSerial::new();
        serial.set_write_error();
        assert_eq!(
            write_frame(&mut serial, &READ_GAS_REQUEST).await,
            Err(Error::WriteFailure)
        );
    }

    #[tokio::test]
    async fn written_frame_reaches_the_line() {
        let mut serial = MockSerial::new();
        write_frame(&mut serial, &READ_GAS_REQUEST).await.unwrap();
        assert_eq!(serial.tx_buffer(), READ_GAS_REQUEST.to_vec());
    }
}
