//! Protocol constants for the emulated DualShock 4.

pub const DS4_NAME: &str = "Sony Interactive Entertainment Wireless Controller";
pub const DS4_VERSION: u16 = 0x0100;
pub const DS4_VID: u16 = 0x054c;
pub const DS4_PID: u16 = 0x09cc;

pub const INPUT_REPORT_USB: u8 = 0x01;
pub const INPUT_REPORT_USB_SIZE: usize = 64;
pub const INPUT_REPORT_BT: u8 = 0x11;
pub const INPUT_REPORT_BT_SIZE: usize = 78;

pub const OUTPUT_REPORT_USB: u8 = 0x05;
pub const OUTPUT_REPORT_USB_SIZE: usize = 32;
pub const OUTPUT_REPORT_BT: u8 = 0x11;
pub const OUTPUT_REPORT_BT_SIZE: usize = 78;

pub const FEATURE_REPORT_PAIRING_INFO: u8 = 0x12;
pub const FEATURE_REPORT_PAIRING_INFO_SIZE: usize = 16;
pub const FEATURE_REPORT_FIRMWARE_INFO: u8 = 0xA3;
pub const FEATURE_REPORT_FIRMWARE_INFO_SIZE: usize = 49;
pub const FEATURE_REPORT_CALIBRATION: u8 = 0x02;
pub const FEATURE_REPORT_CALIBRATION_SIZE: usize = 37;
pub const FEATURE_REPORT_CALIBRATION_BT: u8 = 0x05;
pub const FEATURE_REPORT_CALIBRATION_BT_SIZE: usize = 41;

/// Device timestamp units per nominal report interval. The counter is
/// 16-bit on this protocol and wraps naturally on emission.
pub const TIMESTAMP_INTERVAL: u64 = 188;

// Offsets of the interpreted fields inside the output-report payload, after
// the transport-dependent header has been skipped.
pub const OUTPUT_VALID_FLAG0: usize = 0;
pub const OUTPUT_MOTOR_RIGHT: usize = 3;
pub const OUTPUT_MOTOR_LEFT: usize = 4;
pub const OUTPUT_LIGHTBAR_RED: usize = 5;
pub const OUTPUT_LIGHTBAR_GREEN: usize = 6;
pub const OUTPUT_LIGHTBAR_BLUE: usize = 7;

pub const VALID_FLAG0_MOTOR: u8 = 1 << 0;
pub const VALID_FLAG0_LED: u8 = 1 << 1;

/// Byte 2 of the Bluetooth frame header ahead of the input state.
pub const BT_INPUT_FLAGS: u8 = 0xC0;

/// Touch contact byte: bit 7 clear means the finger is down, the low bits
/// carry the contact id.
pub const TOUCH_CONTACT_INACTIVE: u8 = 0x80;

/// Cable plugged and battery level nibble in the status byte.
pub const STATUS_CHARGING_CABLE: u8 = 0x1B;
