//! Protocol constants for the emulated DualSense and DualSense Edge.

pub const DS5_NAME: &str = "Sony Interactive Entertainment DualSense Wireless Controller";
pub const DS5_VERSION: u16 = 0x8111;
pub const DS5_VID: u16 = 0x054c;
pub const DS5_PID: u16 = 0x0ce6;

pub const DS5_EDGE_NAME: &str = "Sony Interactive Entertainment DualSense Edge Wireless Controller";
pub const DS5_EDGE_VERSION: u16 = 256;
pub const DS5_EDGE_VID: u16 = 0x054c;
pub const DS5_EDGE_PID: u16 = 0x0df2;

pub const INPUT_REPORT_USB: u8 = 0x01;
pub const INPUT_REPORT_USB_SIZE: usize = 64;
pub const INPUT_REPORT_BT: u8 = 0x31;
pub const INPUT_REPORT_BT_SIZE: usize = 78;

pub const OUTPUT_REPORT_USB: u8 = 0x02;
pub const OUTPUT_REPORT_USB_SIZE: usize = 63;
pub const OUTPUT_REPORT_BT: u8 = 0x31;
pub const OUTPUT_REPORT_BT_SIZE: usize = 78;

pub const FEATURE_REPORT_PAIRING_INFO: u8 = 0x09;
pub const FEATURE_REPORT_PAIRING_INFO_SIZE: usize = 20;
pub const FEATURE_REPORT_FIRMWARE_INFO: u8 = 0x20;
pub const FEATURE_REPORT_FIRMWARE_INFO_SIZE: usize = 64;
pub const FEATURE_REPORT_CALIBRATION: u8 = 0x05;
pub const FEATURE_REPORT_CALIBRATION_SIZE: usize = 41;

/// Device timestamp units per nominal report interval. The host driver
/// integrates motion samples assuming this tick between reports.
pub const TIMESTAMP_INTERVAL: u64 = 4096;

// Offsets of the interpreted fields inside the output-report payload, after
// the transport-dependent header has been skipped.
pub const OUTPUT_VALID_FLAG0: usize = 0;
pub const OUTPUT_VALID_FLAG1: usize = 1;
pub const OUTPUT_MOTOR_RIGHT: usize = 2;
pub const OUTPUT_MOTOR_LEFT: usize = 3;
pub const OUTPUT_VALID_FLAG2: usize = 38;
pub const OUTPUT_LIGHTBAR_RED: usize = 44;
pub const OUTPUT_LIGHTBAR_GREEN: usize = 45;
pub const OUTPUT_LIGHTBAR_BLUE: usize = 46;

/// Rumble carried as DualShock 4 compatibility vibration.
pub const VALID_FLAG0_COMPATIBLE_VIBRATION: u8 = 1 << 0;
pub const VALID_FLAG0_HAPTICS_SELECT: u8 = 1 << 1;
/// Lightbar RGB section is valid.
pub const VALID_FLAG1_LIGHTBAR_CONTROL_ENABLE: u8 = 1 << 2;
/// Improved compatibility vibration (newer firmware revisions).
pub const VALID_FLAG2_COMPATIBLE_VIBRATION2: u8 = 1 << 2;

pub const TOUCHPAD_WIDTH: u16 = 1920;
pub const TOUCHPAD_HEIGHT: u16 = 1080;

/// Touch contact byte when a finger is down / lifted.
pub const TOUCH_CONTACT_ACTIVE: u8 = 0x7F;
pub const TOUCH_CONTACT_INACTIVE: u8 = 0x80;
