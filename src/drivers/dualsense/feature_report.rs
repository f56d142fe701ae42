//! Canned feature-report replies.
//!
//! The host driver reads these once at probe time. The calibration table is
//! engineered so the driver's own formula `calibrated = raw * sens_numer /
//! sens_denom` collapses to `calibrated = raw`: motion samples are already
//! converted to physical units before they reach the wire, and must not be
//! re-scaled by the consumer. Changing any constant changes host-side
//! sensor scale.

use super::driver::*;

/// Gyro bias constants, little-endian signed. The bias terms cancel in the
/// driver's sensitivity formula, so these only affect the tiny zero offset
/// reported back to user space.
pub const GYRO_PITCH_BIAS: i16 = -7; // 0xfff9
pub const GYRO_YAW_BIAS: i16 = 9; // 0x0009
pub const GYRO_ROLL_BIAS: i16 = -3; // 0xfffd

/// Plus/minus sensitivity endpoints per gyro axis. With the speed pair
/// below, `sens_numer = (speed_plus + speed_minus) * 1024 = 2048` and
/// `sens_denom = plus - minus = 2048`.
pub const GYRO_SENS_PLUS: i16 = 1024;
pub const GYRO_SENS_MINUS: i16 = -1024;
pub const GYRO_SPEED_PLUS: i16 = 1;
pub const GYRO_SPEED_MINUS: i16 = 1;

/// Accelerometer endpoints: `range_2g = plus - minus = 16384` equals
/// `2 * 8192` counts-per-g, and the derived bias `plus - range_2g / 2` is
/// exactly zero.
pub const ACCEL_SENS_PLUS: i16 = 8192;
pub const ACCEL_SENS_MINUS: i16 = -8192;

fn push_le16(buf: &mut Vec<u8>, value: i16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Feature report 0x05: motion calibration data.
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

/// Feature report 0x09: pairing info. The synthesized controller MAC goes
/// out least-significant byte first, followed by constant identity bytes.
pub fn pairing_report(mac: &[u8; 6]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(FEATURE_REPORT_PAIRING_INFO_SIZE);
    buf.push(FEATURE_REPORT_PAIRING_INFO);
    buf.extend_from_slice(mac);
    buf.extend_from_slice(&[0x08, 0x25, 0x00, 0x1e, 0x00, 0xee, 0x74, 0xd0, 0xbc]);
    buf.resize(FEATURE_REPORT_PAIRING_INFO_SIZE, 0);
    buf
}

/// Feature report 0x20: firmware info. Opaque to us; the host only parses
/// the build date string and the hardware/firmware version words.
pub fn firmware_report() -> Vec<u8> {
    let mut buf = vec![0u8; FEATURE_REPORT_FIRMWARE_INFO_SIZE];
    buf[0] = FEATURE_REPORT_FIRMWARE_INFO;
    buf[1..12].copy_from_slice(b"Sep 21 2021");
    buf[12..20].copy_from_slice(b"04:50:05");
    buf[24..28].copy_from_slice(&0x00000266u32.to_le_bytes()); // hw_version
    buf[28..32].copy_from_slice(&0x01040021u32.to_le_bytes()); // fw_version
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_le16(buf: &[u8], offset: usize) -> i16 {
        i16::from_le_bytes([buf[offset], buf[offset + 1]])
    }

    #[test]
    fn calibration_constants_collapse_to_identity() {
        let buf = calibration_report();
        assert_eq!(buf.len(), FEATURE_REPORT_CALIBRATION_SIZE);
        assert_eq!(buf[0], FEATURE_REPORT_CALIBRATION);

        assert_eq!(read_le16(&buf, 1) as u16, 0xfff9); // pitch bias
        assert_eq!(read_le16(&buf, 3) as u16, 0x0009); // yaw bias

        let speed_plus = read_le16(&buf, 19) as i32;
        let speed_minus = read_le16(&buf, 21) as i32;
        let sens_numer = (speed_plus + speed_minus) * 1024;
        for axis in 0..3 {
            let plus = read_le16(&buf, 7 + axis * 4) as i32;
            let minus = read_le16(&buf, 9 + axis * 4) as i32;
            let sens_denom = plus - minus;
            for raw in [-32000i32, -1, 0, 1, 517, 32000] {
                assert_eq!(raw * sens_numer / sens_denom, raw);
            }
        }

        for axis in 0..3 {
            let plus = read_le16(&buf, 23 + axis * 4) as i32;
            let minus = read_le16(&buf, 25 + axis * 4) as i32;
            let range_2g = plus - minus;
            assert_eq!(2 * 8192, range_2g);
            assert_eq!(plus - range_2g / 2, 0);
        }
    }

    #[test]
    fn pairing_report_embeds_mac_lsb_first() {
        let mac = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
        let buf = pairing_report(&mac);
        assert_eq!(buf.len(), FEATURE_REPORT_PAIRING_INFO_SIZE);
        assert_eq!(buf[0], FEATURE_REPORT_PAIRING_INFO);
        assert_eq!(&buf[1..7], &mac);
    }

    #[test]
    fn firmware_report_is_stable() {
        let buf = firmware_report();
        assert_eq!(buf.len(), FEATURE_REPORT_FIRMWARE_INFO_SIZE);
        assert_eq!(buf[0], FEATURE_REPORT_FIRMWARE_INFO);
        assert_eq!(&buf[1..12], b"Sep 21 2021");
        assert_eq!(buf, firmware_report());
    }
}
