//! DualShock 4 wire formats.
use packed_struct::prelude::*;

use super::driver::*;
use crate::drivers::Direction;

/// One touchpad contact slot: contact byte plus 12-bit X and Y packed into
/// three bytes.
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "4")]
pub struct TouchFingerData {
    /// Bit 7 set means lifted; the low bits carry a rolling contact id.
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

    /// Mark the slot active for the given contact id at the coordinates.
    pub fn set_active(&mut self, id: u8, x: u16, y: u16) {
        self.contact = id & 0x7F;
        self.set_x(x);
        self.set_y(y);
    }

    pub fn set_inactive(&mut self) {
        *self = Self::default();
    }
}

/// One touch event frame: a rolling event counter then both slots.
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq, Default)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "9")]
pub struct TouchPacket {
    pub timestamp: u8,
    #[packed_field(element_size_bytes = "4")]
    pub touch_finger_data: [TouchFingerData; 2],
}

/// The 63-byte input state shared by the USB and Bluetooth framings.
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "63")]
pub struct InputState {
    // byte 0-3
    #[packed_field(bytes = "0")]
    pub joystick_l_x: u8,
    #[packed_field(bytes = "1")]
    pub joystick_l_y: u8,
    #[packed_field(bytes = "2")]
    pub joystick_r_x: u8,
    #[packed_field(bytes = "3")]
    pub joystick_r_y: u8,

    // byte 4
    #[packed_field(bits = "32")]
    pub triangle: bool,
    #[packed_field(bits = "33")]
    pub circle: bool,
    #[packed_field(bits = "34")]
    pub cross: bool,
    #[packed_field(bits = "35")]
    pub square: bool,
    #[packed_field(bits = "36..=39", ty = "enum")]
    pub dpad: Direction,

    // byte 5
    #[packed_field(bits = "40")]
    pub r3: bool,
    #[packed_field(bits = "41")]
    pub l3: bool,
    #[packed_field(bits = "42")]
    pub options: bool,
    #[packed_field(bits = "43")]
    pub share: bool,
    #[packed_field(bits = "44")]
    pub r2: bool,
    #[packed_field(bits = "45")]
    pub l2: bool,
    #[packed_field(bits = "46")]
    pub r1: bool,
    #[packed_field(bits = "47")]
    pub l1: bool,

    // byte 6, 6-bit frame counter sharing the byte with touchpad and ps
    #[packed_field(bits = "48..=53", endian = "lsb")]
    pub counter: Integer<u8, packed_bits::Bits<6>>,
    #[packed_field(bits = "54")]
    pub touchpad: bool,
    #[packed_field(bits = "55")]
    pub ps: bool,

    // byte 7-8
    #[packed_field(bytes = "7")]
    pub l2_trigger: u8,
    #[packed_field(bytes = "8")]
    pub r2_trigger: u8,

    // byte 9-11
    #[packed_field(bytes = "9..=10", endian = "lsb")]
    pub timestamp: Integer<u16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "11")]
    pub temperature: u8,

    // byte 12-23
    #[packed_field(bytes = "12..=13", endian = "lsb")]
    pub gyro_x: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "14..=15", endian = "lsb")]
    pub gyro_y: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "16..=17", endian = "lsb")]
    pub gyro_z: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "18..=19", endian = "lsb")]
    pub accel_x: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "20..=21", endian = "lsb")]
    pub accel_y: Integer<i16, packed_bits::Bits<16>>,
    #[packed_field(bytes = "22..=23", endian = "lsb")]
    pub accel_z: Integer<i16, packed_bits::Bits<16>>,

    // byte 24-29
    #[packed_field(bytes = "24..=28")]
    pub _reserved_0: [u8; 5],
    #[packed_field(bytes = "29")]
    pub status: u8,

    // byte 30-32
    #[packed_field(bytes = "30..=31")]
    pub _reserved_1: [u8; 2],
    #[packed_field(bytes = "32")]
    pub touch_packet_count: u8,

    // byte 33-41, first touch event frame; the remaining frame slots stay
    // zero with a count of zero
    #[packed_field(bytes = "33..=41")]
    pub touch_packet: TouchPacket,

    // byte 42-62
    #[packed_field(bytes = "42..=62")]
    pub _reserved_2: [u8; 21],
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            joystick_l_x: 127,
            joystick_l_y: 127,
            joystick_r_x: 127,
            joystick_r_y: 127,
            triangle: false,
            circle: false,
            cross: false,
            square: false,
            dpad: Direction::None,
            r3: false,
            l3: false,
            options: false,
            share: false,
            r2: false,
            l2: false,
            r1: false,
            l1: false,
            counter: Integer::from_primitive(0),
            touchpad: false,
            ps: false,
            l2_trigger: 0,
            r2_trigger: 0,
            timestamp: Integer::from_primitive(0),
            temperature: 0,
            gyro_x: Integer::from_primitive(0),
            gyro_y: Integer::from_primitive(0),
            gyro_z: Integer::from_primitive(0),
            accel_x: Integer::from_primitive(0),
            accel_y: Integer::from_primitive(0),
            accel_z: Integer::from_primitive(0),
            _reserved_0: [0; 5],
            status: STATUS_CHARGING_CABLE,
            _reserved_1: [0; 2],
            touch_packet_count: 0,
            touch_packet: TouchPacket::default(),
            _reserved_2: [0; 21],
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

/// Bluetooth framing: report id 0x11, two header bytes, the input state,
/// reserved padding, and the CRC trailer.
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "78")]
pub struct BluetoothPackedInputDataReport {
    #[packed_field(bytes = "0")]
    pub report_id: u8,
    /// Poll rate and content flags; 0xC0 marks HID + CRC data.
    #[packed_field(bytes = "1")]
    pub flags: u8,
    #[packed_field(bytes = "2")]
    pub _unkn_0: u8,

    #[packed_field(bytes = "3..=65")]
    pub state: InputState,

    #[packed_field(bytes = "66..=73")]
    pub _reserved: [u8; 8],

    /// Filled in by the CRC authenticator before emission.
    #[packed_field(bytes = "74..=77")]
    pub crc32: [u8; 4],
}

impl Default for BluetoothPackedInputDataReport {
    fn default() -> Self {
        Self {
            report_id: INPUT_REPORT_BT,
            flags: BT_INPUT_FLAGS,
            _unkn_0: 0,
            state: InputState::default(),
            _reserved: [0; 8],
            crc32: [0; 4],
        }
    }
}
