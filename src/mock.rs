//! Test doubles for the sensor collaborators.

use std::collections::VecDeque;
use std::vec::Vec;

use embedded_hal::digital;
use embedded_hal_async::delay::DelayNs;
use embedded_io_async::{ErrorKind, ErrorType, Read, ReadReady, Write};

use crate::ze_analog::AnalogInput;

/// In-memory UART with an injectable receive queue and a recorded transmit log.
#[derive(Debug, Default)]
pub struct MockSerial {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
    chunk_size: Option<usize>,
    write_error: bool,
    read_error: bool,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit every `read` call to at most `size` bytes.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    pub fn inject_rx_data(&mut self, data: &[u8]) {
        self.rx.extend(data.iter().copied());
    }

    pub fn rx_pending(&self) -> usize {
        self.rx.len()
    }

    pub fn tx_buffer(&self) -> Vec<u8> {
        self.tx.clone()
    }

    pub fn clear_tx_buffer(&mut self) {
        self.tx.clear();
    }

    pub fn set_write_error(&mut self) {
        self.write_error = true;
    }

    pub fn set_read_error(&mut self) {
        self.read_error = true;
    }
}

impl ErrorType for MockSerial {
    type Error = ErrorKind;
}

impl Read for MockSerial {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.read_error {
            return Err(ErrorKind::Other);
        }
        let limit = self.chunk_size.unwrap_or(buf.len()).min(buf.len());
        let n = limit.min(self.rx.len());
        for slot in buf.iter_mut().take(n) {
            *slot = self.rx.pop_front().unwrap_or_default();
        }
        Ok(n)
    }
}

impl ReadReady for MockSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.rx.is_empty())
    }
}

impl Write for MockSerial {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.write_error {
            return Err(ErrorKind::Other);
        }
        self.tx.extend_from_slice(buf);
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Delay that returns immediately and records every requested duration.
#[derive(Debug, Default)]
pub struct MockDelay {
    delays_ms: Vec<u32>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delays_ms(&self) -> &[u32] {
        &self.delays_ms
    }

    pub fn total_ms(&self) -> u64 {
        self.delays_ms.iter().map(|&ms| u64::from(ms)).sum()
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.delays_ms.push(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

/// ADC returning a fixed sample.
#[derive(Debug)]
pub struct MockAdc {
    pub sample: u16,
    pub fail: bool,
}

impl MockAdc {
    pub fn new(sample: u16) -> Self {
        Self {
            sample,
            fail: false,
        }
    }
}

impl AnalogInput for MockAdc {
    type Error = ();

    async fn read_u16(&mut self) -> Result<u16, Self::Error> {
        if self.fail {
            return Err(());
        }
        Ok(self.sample)
    }
}

/// Output pin counting its toggles.
#[derive(Debug, Default)]
pub struct MockPin {
    high: bool,
    toggles: usize,
    fail: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn toggles(&self) -> usize {
        self.toggles
    }
}

impl digital::ErrorType for MockPin {
    type Error = digital::ErrorKind;
}

impl digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(digital::ErrorKind::Other);
        }
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(digital::ErrorKind::Other);
        }
        self.high = true;
        Ok(())
    }
}

impl digital::StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(digital::ErrorKind::Other);
        }
        self.high = !self.high;
        self.toggles += 1;
        Ok(())
    }
}
