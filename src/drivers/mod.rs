pub mod dualsense;
pub mod dualshock4;

use packed_struct::prelude::*;

/// Hat-switch encoding shared by both protocols. The wire value is a 4-bit
/// rose with 8 as the null state.
#[derive(PrimitiveEnum_u8, Clone, Copy, PartialEq, Debug, Default)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
    #[default]
    None = 8,
}

impl Direction {
    /// Decode the status model's packed two-nibble d-pad byte: high nibble
    /// vertical (1 up, 2 down), low nibble horizontal (1 right, 2 left).
    /// Anything unrecognized reads as released.
    pub fn from_status_byte(dpad: u8) -> Self {
        match dpad {
            0x00 => Self::None,
            0x01 => Self::East,
            0x02 => Self::West,
            0x10 => Self::North,
            0x11 => Self::NorthEast,
            0x12 => Self::NorthWest,
            0x20 => Self::South,
            0x21 => Self::SouthEast,
            0x22 => Self::SouthWest,
            _ => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dpad_mapping_is_total() {
        let cases = [
            (0x00u8, Direction::None),
            (0x01, Direction::East),
            (0x02, Direction::West),
            (0x10, Direction::North),
            (0x20, Direction::South),
            (0x11, Direction::NorthEast),
            (0x12, Direction::NorthWest),
            (0x21, Direction::SouthEast),
            (0x22, Direction::SouthWest),
        ];
        for (byte, expected) in cases {
            assert_eq!(Direction::from_status_byte(byte), expected, "{byte:#04x}");
        }
        // Every other byte value decodes as released.
        for byte in 0..=u8::MAX {
            if cases.iter().any(|(b, _)| *b == byte) {
                continue;
            }
            assert_eq!(Direction::from_status_byte(byte), Direction::None);
        }
    }

    #[test]
    fn hat_values_fit_the_wire_nibble() {
        for byte in 0..=u8::MAX {
            let value = Direction::from_status_byte(byte).to_primitive();
            assert!(value <= 8);
        }
    }
}
