//! Canned feature-report replies.
//!
//! Same identity-calibration trick as the DualSense tables: the constants
//! are chosen so `sens_numer / sens_denom == 1` for every axis, since
//! motion samples are already in physical units when composed.

use super::driver::*;

pub const GYRO_PITCH_BIAS: i16 = -7; // 0xfff9
pub const GYRO_YAW_BIAS: i16 = 9; // 0x0009
pub const GYRO_ROLL_BIAS: i16 = -3; // 0xfffd

/// `sens_numer = (speed_plus + speed_minus) * 1024 = 2048`,
/// `sens_denom = plus - minus = 2048`.
pub const GYRO_SENS_PLUS: i16 = 1024;
pub const GYRO_SENS_MINUS: i16 = -1024;
pub const GYRO_SPEED_PLUS: i16 = 1;
pub const GYRO_SPEED_MINUS: i16 = 1;

/// `range_2g = plus - minus = 16384 = 2 * 8192` counts per g.
pub const ACCEL_SENS_PLUS: i16 = 8192;
pub const ACCEL_SENS_MINUS: i16 = -8192;

fn push_le16(buf: &mut Vec<u8>, value: i16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Feature report 0x02: motion calibration data as served over USB. Gyro
/// sensitivity pairs are grouped per axis (plus then minus).
pub fn calibration_report() -> Vec<u8> {
    let mut buf = Vec::with_capacity(FEATURE_REPORT_CALIBRATION_SIZE);
    buf.push(FEATURE_REPORT_CALIBRATION);
    push_le16(&mut buf, GYRO_PITCH_BIAS);
    push_le16(&mut buf, GYRO_YAW_BIAS);
    push_le16(&mut buf, GYRO_ROLL_BIAS);
    for _axis in 0..3 {
        push_le16(&mut buf, GYRO_SENS_PLUS);
        push_le16(&mut buf, GYRO_SENS_MINUS);
    }
    push_le16(&mut buf, GYRO_SPEED_PLUS);
    push_le16(&mut buf, GYRO_SPEED_MINUS);
    for _axis in 0..3 {
        push_le16(&mut buf, ACCEL_SENS_PLUS);
        push_le16(&mut buf, ACCEL_SENS_MINUS);
    }
    buf.resize(FEATURE_REPORT_CALIBRATION_SIZE, 0);
    buf
}

/// Feature report 0x05: the Bluetooth calibration variant. Same values,
/// but the gyro sensitivity words are interleaved (all plus, then all
/// minus) and the tail leaves room for the CRC trailer.
pub fn calibration_report_bt() -> Vec<u8> {
    let mut buf = Vec::with_capacity(FEATURE_REPORT_CALIBRATION_BT_SIZE);
    buf.push(FEATURE_REPORT_CALIBRATION_BT);
    push_le16(&mut buf, GYRO_PITCH_BIAS);
    push_le16(&mut buf, GYRO_YAW_BIAS);
    push_le16(&mut buf, GYRO_ROLL_BIAS);
    for _axis in 0..3 {
        push_le16(&mut buf, GYRO_SENS_PLUS);
    }
    for _axis in 0..3 {
        push_le16(&mut buf, GYRO_SENS_MINUS);
    }
    push_le16(&mut buf, GYRO_SPEED_PLUS);
    push_le16(&mut buf, GYRO_SPEED_MINUS);
    for _axis in 0..3 {
        push_le16(&mut buf, ACCEL_SENS_PLUS);
        push_le16(&mut buf, ACCEL_SENS_MINUS);
    }
    buf.resize(FEATURE_REPORT_CALIBRATION_BT_SIZE, 0);
    buf
}

/// Feature report 0x12: pairing info with the controller MAC least
/// significant byte first.
pub fn pairing_report(mac: &[u8; 6]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(FEATURE_REPORT_PAIRING_INFO_SIZE);
    buf.push(FEATURE_REPORT_PAIRING_INFO);
    buf.extend_from_slice(mac);
    buf.extend_from_slice(&[0x08, 0x25, 0x00, 0x1e, 0x00, 0xee, 0x74, 0xd0, 0xbc]);
    buf.truncate(FEATURE_REPORT_PAIRING_INFO_SIZE);
    buf
}

/// Feature report 0xA3: firmware info. The host parses the build strings
/// and the 16-bit hardware/firmware version words.
pub fn firmware_report() -> Vec<u8> {
    let mut buf = vec![0u8; FEATURE_REPORT_FIRMWARE_INFO_SIZE];
    buf[0] = FEATURE_REPORT_FIRMWARE_INFO;
    buf[1..12].copy_from_slice(b"Sep 21 2018");
    buf[17..25].copy_from_slice(b"04:50:05");
    buf[35..37].copy_from_slice(&0x0100u16.to_le_bytes()); // hw_version
    buf[41..43].copy_from_slice(&0x4001u16.to_le_bytes()); // fw_version
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_le16(buf: &[u8], offset: usize) -> i16 {
        i16::from_le_bytes([buf[offset], buf[offset + 1]])
    }

    #[test]
    fn usb_calibration_collapses_to_identity() {
        let buf = calibration_report();
        assert_eq!(buf.len(), FEATURE_REPORT_CALIBRATION_SIZE);
        assert_eq!(buf[0], FEATURE_REPORT_CALIBRATION);

        assert_eq!(read_le16(&buf, 1) as u16, 0xfff9); // pitch bias
        assert_eq!(read_le16(&buf, 3) as u16, 0x0009); // yaw bias
        assert_eq!(read_le16(&buf, 5) as u16, 0xfffd); // roll bias

        let speed_2x = (read_le16(&buf, 19) + read_le16(&buf, 21)) as i32;
        let sens_numer = speed_2x * 1024;
        for axis in 0..3 {
            let plus = read_le16(&buf, 7 + axis * 4) as i32;
            let minus = read_le16(&buf, 9 + axis * 4) as i32;
            let sens_denom = plus - minus;
            for raw in [-32000i32, -1, 0, 1, 188, 32000] {
                assert_eq!(raw * sens_numer / sens_denom, raw);
            }
        }
    }

    #[test]
    fn bt_calibration_interleaves_and_reserves_crc_space() {
        let buf = calibration_report_bt();
        assert_eq!(buf.len(), FEATURE_REPORT_CALIBRATION_BT_SIZE);
        assert_eq!(buf[0], FEATURE_REPORT_CALIBRATION_BT);
        // All three plus words, then all three minus words.
        for axis in 0..3 {
            assert_eq!(read_le16(&buf, 7 + axis * 2), GYRO_SENS_PLUS);
            assert_eq!(read_le16(&buf, 13 + axis * 2), GYRO_SENS_MINUS);
        }
        assert_eq!(&buf[37..41], &[0, 0, 0, 0]);
    }

    #[test]
    fn pairing_report_embeds_mac_lsb_first() {
        let mac = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let buf = pairing_report(&mac);
        assert_eq!(buf.len(), FEATURE_REPORT_PAIRING_INFO_SIZE);
        assert_eq!(buf[0], FEATURE_REPORT_PAIRING_INFO);
        assert_eq!(&buf[1..7], &mac);
    }
}
