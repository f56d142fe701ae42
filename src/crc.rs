//! CRC-32 authentication of Bluetooth-transport reports.
//!
//! Every report exchanged over Bluetooth carries a 4-byte little-endian
//! trailer: the zlib CRC-32 of a single report-category byte followed by the
//! report content up to the trailer. USB-transport reports carry no trailer
//! and never pass through this module.
use crc32fast::Hasher;

/// Category byte folded into the CRC ahead of the report bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum ReportCategory {
    Input = 0xA1,
    Output = 0xA2,
    Feature = 0xA3,
}

/// Compute the trailer value for `buf[..len - 4]`.
fn compute(buf: &[u8], category: ReportCategory) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[category as u8]);
    hasher.update(buf);
    hasher.finalize()
}

/// Write the CRC trailer into the last 4 bytes of `buf`.
///
/// The buffer must already be sized for the full Bluetooth report, trailer
/// included. Buffers shorter than the trailer are left untouched.
pub fn append_crc(buf: &mut [u8], category: ReportCategory) {
    let Some(body_len) = buf.len().checked_sub(4) else {
        return;
    };
    let crc = compute(&buf[..body_len], category);
    buf[body_len..].copy_from_slice(&crc.to_le_bytes());
}

/// Check the trailer of a received Bluetooth report. The inverse of
/// [append_crc]; inbound validation is optional and never mutates state.
pub fn verify_crc(buf: &[u8], category: ReportCategory) -> bool {
    let Some(body_len) = buf.len().checked_sub(4) else {
        return false;
    };
    let expected = compute(&buf[..body_len], category);
    let mut trailer = [0u8; 4];
    trailer.copy_from_slice(&buf[body_len..]);
    u32::from_le_bytes(trailer) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_categories() {
        for category in [
            ReportCategory::Input,
            ReportCategory::Output,
            ReportCategory::Feature,
        ] {
            let mut buf = vec![0x31, 0x01, 0xAA, 0x55, 0x00, 0x00, 0x00, 0x00];
            append_crc(&mut buf, category);
            assert!(verify_crc(&buf, category));
        }
    }

    #[test]
    fn category_seed_changes_trailer() {
        let mut a = vec![0x05, 0x01, 0x02, 0x03, 0, 0, 0, 0];
        let mut b = a.clone();
        append_crc(&mut a, ReportCategory::Input);
        append_crc(&mut b, ReportCategory::Feature);
        assert_ne!(a[4..], b[4..]);
        assert!(!verify_crc(&a, ReportCategory::Feature));
    }

    #[test]
    fn single_bit_flip_fails_verification() {
        let mut buf = vec![0u8; 32];
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = i as u8;
        }
        append_crc(&mut buf, ReportCategory::Output);

        for byte in 0..28 {
            for bit in 0..8 {
                let mut corrupted = buf.clone();
                corrupted[byte] ^= 1 << bit;
                assert!(
                    !verify_crc(&corrupted, ReportCategory::Output),
                    "flip of byte {byte} bit {bit} went undetected"
                );
            }
        }
    }

    #[test]
    fn short_buffer_is_rejected() {
        let mut buf = vec![0u8; 3];
        append_crc(&mut buf, ReportCategory::Input);
        assert_eq!(buf, vec![0, 0, 0]);
        assert!(!verify_crc(&buf, ReportCategory::Input));
    }
}
