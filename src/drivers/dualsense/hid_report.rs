//! DualSense wire formats. Layouts follow the community documentation of
//! the real controller; the host driver is bit-exact about these.
use packed_struct::prelude::*;

use super::driver::*;
use crate::drivers::Direction;

#[derive(PrimitiveEnum_u8, Clone, Copy, PartialEq, Debug, Default)]
pub enum PowerState {
    Discharging = 0x00,
    Charging = 0x01,
    #[default]
    Complete = 0x02,
    AbnormalVoltage = 0x0A,
    AbnormalTemperature = 0x0B,
    ChargingError = 0x0F,
}

/// One touchpad contact slot: contact byte plus 12-bit X and Y packed into
/// three bytes (`x_lo`, `x_hi:4|y_lo:4`, `y_hi`).
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "4")]
pub struct TouchFingerData {
    #[packed_field(bytes = "0")]
    pub contact: u8,
    #[packed_field(bytes = "1")]
    pub x_lo: u8,
    #[packed_field(bits = "16..=19")]
    pub y_lo: Integer<u8, packed_bits::Bits<4>>,
    #[packed_field(bits = "20..=23")]
    pub x_hi: Integer<u8, packed_bits::Bits<4>>,
    #[packed_field(bytes = "3")]
    pub y_hi: u8,
}

impl Default for TouchFingerData {
    fn default() -> Self {
        Self {
            contact: TOUCH_CONTACT_INACTIVE,
            x_lo: Default::default(),
            y_lo: Default::default(),
            x_hi: Default::default(),
            y_hi: Default::default(),
        }
    }
}

impl TouchFingerData {
    pub fn get_x(&self) -> u16 {
        ((self.x_hi.to_primitive() as u16) << 8) | self.x_lo as u16
    }

    pub fn get_y(&self) -> u16 {
        ((self.y_hi as u16) << 4) | self.y_lo.to_primitive() as u16
    }

    pub fn set_x(&mut self, x_raw: u16) {
        self.x_lo = (x_raw & 0x00FF) as u8;
        self.x_hi = Integer::from_primitive(((x_raw & 0x0F00) >> 8) as u8);
    }

    pub fn set_y(&mut self, y_raw: u16) {
        self.y_lo = Integer::from_primitive((y_raw & 0x000F) as u8);
        self.y_hi = ((y_raw & 0x0FF0) >> 4) as u8;
    }

    /// Mark the slot active at the given coordinates.
    pub fn set_active(&mut self, x: u16, y: u16) {
        self.contact = TOUCH_CONTACT_ACTIVE;
        self.set_x(x);
        self.set_y(y);
    }

    pub fn set_inactive(&mut self) {
        *self = Self::default();
    }
}

#[derive(PackedStruct, Debug, Copy, Clone, PartialEq, Default)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "9")]
pub struct TouchData {
    #[packed_field(element_size_bytes = "4")]
    pub touch_finger_data: [TouchFingerData; 2],
    pub timestamp: u8,
}

/// The 63-byte input state shared by the USB and Bluetooth framings.
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "63")]
pub struct InputState {
    // byte 0-6
    #[packed_field(bytes = "0")]
    pub joystick_l_x: u8,
    #[packed_field(bytes = "1")]
    pub joystick_l_y: u8,
    #[packed_field(bytes = "2")]
    pub joystick_r_x: u8,
    #[packed_field(bytes = "3")]
    pub joystick_r_y: u8,
    #[packed_field(bytes = "4")]
    pub l2_trigger: u8,
    #[packed_field(bytes = "5")]
    pub r2_trigger: u8,
    #[packed_field(bytes = "6")]
    pub seq_number: u8,

    // byte 7
    #[packed_field(bits = "56")]
    pub triangle: bool,
    #[packed_field(bits = "57")]
    pub circle: bool,
    #[packed_field(bits = "58")]
    pub cross: bool,
    #[packed_field(bits = "59")]
    pub square: bool,
    #[packed_field(bits = "60..=63", ty = "enum")]
    pub dpad: Direction,

    // byte 8
    #[packed_field(bits = "64")]
    pub r3: bool,
    #[packed_field(bits = "65")]
    pub l3: bool,
    #[packed_field(bits = "66")]
    pub options: bool,
    #[packed_field(bits = "67")]
    pub create: bool,
    #[packed_field(bits = "68")]
    pub r2: bool,
    #[packed_field(bits = "69")]
    pub l2: bool,
    #[packed_field(bits = "70")]
    pub r1: bool,
    #[packed_field(bits = "71")]
    pub l1: bool,

    // byte 9, the paddle and function buttons only exist on the Edge
    #[packed_field(bits = "72")]
    pub right_paddle: bool,
    #[packed_field(bits = "73")]
    pub left_paddle: bool,
    #[packed_field(bits = "74")]
    pub right_fn: bool,
    #[packed_field(bits = "75")]
    pub left_fn: bool,
    #[packed_field(bits = "76")]
    pub _unkn_0: bool,
    #[packed_field(bits = "77")]
    pub mute: bool,
    #[packed_field(bits = "78")]
    pub touchpad: bool,
    #[packed_field(bits = "79")]
    pub ps: bool,

    // byte 10-14, reserved by the host driver
    #[packed_field(bytes = "10")]
    pub _unkn_1: u8,
    #[packed_field(bytes = "11..=14", endian = "lsb")]
    pub _unkn_counter: Integer<u32, packed_bits::Bits<32>>,

    // byte 15-26
    #[packed_field(bytes = "15..=16", endian = "lsb")]
    pub gyro_x: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "17..=18", endian = "lsb")]
    pub gyro_y: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "19..=20", endian = "lsb")]
    pub gyro_z: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "21..=22", endian = "lsb")]
    pub accel_x: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "23..=24", endian = "lsb")]
    pub accel_y: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "25..=26", endian = "lsb")]
    pub accel_z: Integer<i16, packed_bits::Bits<16>>,

    // byte 27-31
    #[packed_field(bytes = "27..=30", endian = "lsb")]
    pub sensor_timestamp: Integer<u32, packed_bits::Bits<32>>,
    #[packed_field(bytes = "31")]
    pub temperature: u8,

    // byte 32-40
    #[packed_field(bytes = "32..=40")]
    pub touch_data: TouchData,

    // byte 41-51, adaptive trigger feedback and host timestamp echo;
    // acknowledged but not modeled
    #[packed_field(bytes = "41..=51")]
    pub _trigger_feedback: [u8; 11],

    // byte 52
    #[packed_field(bits = "416..=419", ty = "enum")]
    pub power_state: PowerState,
    #[packed_field(bits = "420..=423", endian = "lsb")]
    pub power_percent: Integer<u8, packed_bits::Bits<4>>,

    // byte 53
    #[packed_field(bits = "424..=426", endian = "lsb")]
    pub _plugged_unkn_0: Integer<u8, packed_bits::Bits<3>>,
    #[packed_field(bits = "427")]
    pub plugged_usb_power: bool,
    #[packed_field(bits = "428")]
    pub plugged_usb_data: bool,
    #[packed_field(bits = "429")]
    pub mic_muted: bool,
    #[packed_field(bits = "430")]
    pub plugged_mic: bool,
    #[packed_field(bits = "431")]
    pub plugged_headphones: bool,

    // byte 54-62
    #[packed_field(bytes = "54")]
    pub _plugged_unkn_1: u8,
    #[packed_field(bytes = "55..=62")]
    pub aes_cmac: [u8; 8],
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            joystick_l_x: 127,
            joystick_l_y: 127,
            joystick_r_x: 127,
            joystick_r_y: 127,
            l2_trigger: 0,
            r2_trigger: 0,
            seq_number: 0,
            triangle: false,
            circle: false,
            cross: false,
            square: false,
            dpad: Direction::None,
            r3: false,
            l3: false,
            options: false,
            create: false,
            r2: false,
            l2: false,
            r1: false,
            l1: false,
            right_paddle: false,
            left_paddle: false,
            right_fn: false,
            left_fn: false,
            _unkn_0: false,
            mute: false,
            touchpad: false,
            ps: false,
            _unkn_1: 0,
            _unkn_counter: Integer::from_primitive(0),
            gyro_x: Integer::from_primitive(0),
            gyro_y: Integer::from_primitive(0),
            gyro_z: Integer::from_primitive(0),
            accel_x: Integer::from_primitive(0),
            accel_y: Integer::from_primitive(0),
            accel_z: Integer::from_primitive(0),
            sensor_timestamp: Integer::from_primitive(0),
            temperature: 0,
            touch_data: TouchData::default(),
            _trigger_feedback: [0; 11],
            power_state: PowerState::Complete,
            power_percent: Integer::from_primitive(0x0A),
            _plugged_unkn_0: Integer::from_primitive(0),
            plugged_usb_power: true,
            plugged_usb_data: true,
            mic_muted: false,
            plugged_mic: false,
            plugged_headphones: false,
            _plugged_unkn_1: 0,
            aes_cmac: [0; 8],
        }
    }
}

/// USB framing: report id 0x01 followed by the input state.
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "64")]
pub struct UsbPackedInputDataReport {
    #[packed_field(bytes = "0")]
    pub report_id: u8,
    #[packed_field(bytes = "1..=63")]
    pub state: InputState,
}

impl Default for UsbPackedInputDataReport {
    fn default() -> Self {
        Self {
            report_id: INPUT_REPORT_USB,
            state: InputState::default(),
        }
    }
}

/// Bluetooth framing: report id 0x31, a sequence/flags byte, the input
/// state, reserved padding, and the CRC trailer.
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "78")]
pub struct BluetoothPackedInputDataReport {
    #[packed_field(bytes = "0")]
    pub report_id: u8,

    // byte 1
    #[packed_field(bits = "8..=11", endian = "lsb")]
    pub seq_number: Integer<u8, packed_bits::Bits<4>>,
    #[packed_field(bits = "12..=13", endian = "lsb")]
    pub _unkn_0: Integer<u8, packed_bits::Bits<2>>,
    #[packed_field(bits = "14")]
    pub has_mic: bool,
    #[packed_field(bits = "15")]
    pub has_hid: bool,

    #[packed_field(bytes = "2..=64")]
    pub state: InputState,

    #[packed_field(bytes = "65..=73")]
    pub _reserved: [u8; 9],

    /// Filled in by the CRC authenticator before emission.
    #[packed_field(bytes = "74..=77")]
    pub crc32: [u8; 4],
}

impl Default for BluetoothPackedInputDataReport {
    fn default() -> Self {
        Self {
            report_id: INPUT_REPORT_BT,
            seq_number: Integer::from_primitive(0),
            _unkn_0: Integer::from_primitive(0),
            has_mic: false,
            has_hid: true,
            state: InputState::default(),
            _reserved: [0; 9],
            crc32: [0; 4],
        }
    }
}
