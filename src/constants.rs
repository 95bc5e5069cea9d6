use crate::frame::Frame;

// FRAME_LEN is the size of every frame exchanged with the sensor, in both directions.
pub const FRAME_LEN: usize = 9;

// START_BYTE marks the beginning of any frame (request or response).
pub const START_BYTE: u8 = 0xFF;

// SENSOR_NUMBER addresses the sensor in request frames. Only one sensor per UART.
pub const SENSOR_NUMBER: u8 = 0x01;

// CMD_READ_GAS asks the sensor for its current gas concentration.
pub const CMD_READ_GAS: u8 = 0x86;

// CMD_CALIBRATE_ZERO sets the current concentration as the 400ppm zero point (MH-Z19B).
pub const CMD_CALIBRATE_ZERO: u8 = 0x87;

// CMD_SET_MODE switches a ZE-series sensor between initiative and Q&A mode.
pub const CMD_SET_MODE: u8 = 0x78;

// MODE_INITIATIVE is the payload byte selecting initiative (push) mode.
pub const MODE_INITIATIVE: u8 = 0x40;

// MODE_QUERY_ANSWER is the payload byte selecting query/answer mode.
pub const MODE_QUERY_ANSWER: u8 = 0x41;

// Checksums of the two set-mode frames, as listed in the ZE-series datasheets.
pub const SET_MODE_INITIATIVE_CHECKSUM: u8 = 0x47;
pub const SET_MODE_QUERY_ANSWER_CHECKSUM: u8 = 0x46;

// READ_GAS_REQUEST is the fixed "read concentration" request shared by both sensor families.
pub const READ_GAS_REQUEST: Frame = [
    START_BYTE,
    SENSOR_NUMBER,
    CMD_READ_GAS,
    0x00,
    0x00,
    0x00,
    0x00,
    0x00,
    0x79,
];

// CALIBRATE_ZERO_REQUEST is the fixed zero-point calibration request of the MH-Z19B.
pub const CALIBRATE_ZERO_REQUEST: Frame = [
    START_BYTE,
    SENSOR_NUMBER,
    CMD_CALIBRATE_ZERO,
    0x00,
    0x00,
    0x00,
    0x00,
    0x00,
    0x78,
];

// DEFAULT_BAUD_RATE is the UART speed every supported sensor ships with.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

// CO2_SETTLE_MS is how long the MH-Z19B needs before its answer is available.
pub const CO2_SETTLE_MS: u32 = 100;

// QUERY_SETTLE_MS is how long a ZE-series sensor needs to answer in Q&A mode.
pub const QUERY_SETTLE_MS: u32 = 500;

// Calibration timing: 11 indicator toggles, 500ms apart, then 20 minutes in clean air.
pub const CALIBRATION_BLINK_COUNT: u8 = 11;
pub const CALIBRATION_BLINK_INTERVAL_MS: u32 = 500;
pub const CALIBRATION_WARM_UP_MS: u32 = 1_200_000;

// Analog output voltage span of ZE-series sensors.
pub const ANALOG_VOLTAGE_MIN: f32 = 0.4;
pub const ANALOG_VOLTAGE_MAX: f32 = 2.0;

// ADC reference voltage and full-scale value of a normalized 16-bit sample.
pub const ADC_REFERENCE_VOLTAGE: f32 = 3.3;
pub const ADC_FULL_SCALE: f32 = 65535.0;

// ANALOG_UNIT_DIVISOR converts the mapped analog value into the sensor's reporting unit.
pub const ANALOG_UNIT_DIVISOR: f32 = 10.0;
