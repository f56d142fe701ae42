//! Protocol engines that impersonate a physical controller over the
//! virtual HID transport. Each engine owns the composer and interpreter
//! for one protocol; [session::SessionDriver] owns the device node and the
//! emission loop.
pub mod dualsense;
pub mod dualshock4;
pub mod session;

use packed_struct::PackingError;
use rand::Rng;
use thiserror::Error;
use uhid_virt::CreateParams;

use crate::status::{GamepadStatus, StatusUpdate};

/// Wire transport the virtual device claims to sit on. The choice drives
/// report framing, CRC trailers and the advertised bus type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Usb,
    Bluetooth,
}

impl Transport {
    pub fn is_bluetooth(&self) -> bool {
        matches!(self, Transport::Bluetooth)
    }
}

/// Commands accepted by a running [session::SessionDriver].
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Apply one field update from the capture side.
    Update(StatusUpdate),
    /// Finish the current cycle, destroy the device and exit.
    Stop,
}

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("unexpected report length {got}, expected {expected}")]
    UnexpectedLength { expected: usize, got: usize },
    #[error("unexpected report id {id:#04x}")]
    UnexpectedReportId { id: u8 },
    #[error("failed to pack report: {0}")]
    Pack(#[from] PackingError),
    #[error("gyro fusion mapping divisor must be non-zero")]
    ZeroMappingDivisor,
}

/// Byte offset of the interpreted payload inside a host OUTPUT report.
///
/// Bluetooth frames carry an extra sequence/tag byte pair ahead of the
/// payload for the vendor report ids, one extra byte more for the legacy
/// id 0x02, and none for id 0x01. Kept as an explicit lookup so the quirk
/// is auditable in one place.
pub fn output_payload_offset(transport: Transport, report_id: u8) -> usize {
    match (transport, report_id) {
        (Transport::Usb, _) => 1,
        (Transport::Bluetooth, 0x01) => 1,
        (Transport::Bluetooth, 0x02) => 3,
        (Transport::Bluetooth, id) if id > 0x10 => 2,
        (Transport::Bluetooth, _) => 1,
    }
}

/// Pack one signed stick axis into the unsigned wire byte.
pub fn pack_stick_axis(value: i16) -> u8 {
    ((value as i32 + 32768) >> 8) as u8
}

/// Colon-separated MAC string, most significant byte first, used as the
/// created device's unique identifier. MACs are stored least significant
/// byte first throughout, matching their on-wire order.
pub fn format_mac(mac: &[u8; 6]) -> String {
    format!(
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        mac[5], mac[4], mac[3], mac[2], mac[1], mac[0]
    )
}

/// Synthesize a locally administered, unicast controller MAC.
pub fn random_mac() -> [u8; 6] {
    let mut rng = rand::rng();
    let mut mac: [u8; 6] = rng.random();
    mac[5] = (mac[5] | 0x02) & 0xFE;
    mac
}

/// Parameters of the gyro-to-analog fusion step of the composer.
#[derive(Debug, Clone, Copy)]
pub struct GyroFusionParams {
    threshold: i32,
    mapping: i32,
}

pub const DEFAULT_FUSION_THRESHOLD: i32 = 170;
pub const DEFAULT_FUSION_MAPPING: i32 = 10;

impl GyroFusionParams {
    /// A zero divisor is rejected here so composition can divide freely.
    pub fn new(threshold: i32, mapping: i32) -> Result<Self, ProtocolError> {
        if mapping == 0 {
            return Err(ProtocolError::ZeroMappingDivisor);
        }
        Ok(Self { threshold, mapping })
    }

    /// `(contrib_x, contrib_y)` for the current raw gyro sample. The yaw
    /// rate drives the X axis and the pitch rate drives Y.
    pub fn contributions(&self, raw_gyro: &[i16; 3]) -> (i32, i32) {
        (
            127 + raw_gyro[1] as i32 / self.mapping,
            127 + raw_gyro[0] as i32 / self.mapping,
        )
    }

    pub fn exceeds_threshold(&self, contrib: i32) -> bool {
        contrib.abs() >= self.threshold
    }

    /// Nudge a packed `[x, y]` stick byte pair, each axis only when its
    /// contribution clears the threshold.
    pub fn fuse(&self, raw_gyro: &[i16; 3], x: &mut u8, y: &mut u8) {
        let (contrib_x, contrib_y) = self.contributions(raw_gyro);
        if self.exceeds_threshold(contrib_x) {
            *x = fuse_stick_byte(*x, contrib_x);
        }
        if self.exceeds_threshold(contrib_y) {
            *y = fuse_stick_byte(*y, contrib_y);
        }
    }
}

impl Default for GyroFusionParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FUSION_THRESHOLD,
            mapping: DEFAULT_FUSION_MAPPING,
        }
    }
}

/// Add a fusion contribution to a stick byte, saturating to the byte range.
pub fn fuse_stick_byte(current: u8, contrib: i32) -> u8 {
    (current as i32 + contrib).clamp(0, 255) as u8
}

/// The composer/interpreter contract one protocol engine fulfills.
pub trait ProtocolEngine {
    /// Device metadata and report descriptor for the create message.
    fn create_params(&self) -> CreateParams;

    fn transport(&self) -> Transport;

    /// Build one INPUT report from a status snapshot. The caller holds the
    /// status lock for the duration of the call.
    fn compose_input_report(&mut self, status: &GamepadStatus) -> Result<Vec<u8>, ProtocolError>;

    /// Interpret a host OUTPUT report, updating rumble and lightbar state.
    fn handle_output_report(
        &mut self,
        data: &[u8],
        status: &mut GamepadStatus,
    ) -> Result<(), ProtocolError>;

    /// Reply to a GET_REPORT feature request. `None` means the request is
    /// ignored without a reply.
    fn handle_feature_request(&mut self, report_number: u8) -> Option<Vec<u8>>;
}

/// The protocol selected once at startup from device settings.
pub enum ProtocolSession {
    DualShock4(dualshock4::DualShock4Engine),
    DualSense(dualsense::DualSenseEngine),
}

impl ProtocolEngine for ProtocolSession {
    fn create_params(&self) -> CreateParams {
        match self {
            Self::DualShock4(engine) => engine.create_params(),
            Self::DualSense(engine) => engine.create_params(),
        }
    }

    fn transport(&self) -> Transport {
        match self {
            Self::DualShock4(engine) => engine.transport(),
            Self::DualSense(engine) => engine.transport(),
        }
    }

    fn compose_input_report(&mut self, status: &GamepadStatus) -> Result<Vec<u8>, ProtocolError> {
        match self {
            Self::DualShock4(engine) => engine.compose_input_report(status),
            Self::DualSense(engine) => engine.compose_input_report(status),
        }
    }

    fn handle_output_report(
        &mut self,
        data: &[u8],
        status: &mut GamepadStatus,
    ) -> Result<(), ProtocolError> {
        match self {
            Self::DualShock4(engine) => engine.handle_output_report(data, status),
            Self::DualSense(engine) => engine.handle_output_report(data, status),
        }
    }

    fn handle_feature_request(&mut self, report_number: u8) -> Option<Vec<u8>> {
        match self {
            Self::DualShock4(engine) => engine.handle_feature_request(report_number),
            Self::DualSense(engine) => engine.handle_feature_request(report_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_payload_offsets_encode_the_bluetooth_quirk() {
        for id in 0..=u8::MAX {
            assert_eq!(output_payload_offset(Transport::Usb, id), 1);
        }
        assert_eq!(output_payload_offset(Transport::Bluetooth, 0x01), 1);
        assert_eq!(output_payload_offset(Transport::Bluetooth, 0x02), 3);
        assert_eq!(output_payload_offset(Transport::Bluetooth, 0x11), 2);
        assert_eq!(output_payload_offset(Transport::Bluetooth, 0x31), 2);
        assert_eq!(output_payload_offset(Transport::Bluetooth, 0x05), 1);
    }

    #[test]
    fn stick_packing_covers_the_byte_range_monotonically() {
        assert_eq!(pack_stick_axis(i16::MIN), 0);
        assert_eq!(pack_stick_axis(0), 128);
        assert_eq!(pack_stick_axis(i16::MAX), 255);

        let mut last = 0u8;
        for v in (i16::MIN..=i16::MAX).step_by(17) {
            let packed = pack_stick_axis(v);
            assert!(packed >= last);
            last = packed;
        }
    }

    #[test]
    fn fused_stick_bytes_stay_in_range() {
        for current in [0u8, 1, 127, 128, 254, 255] {
            for contrib in [-100_000, -256, -1, 0, 1, 127, 256, 100_000] {
                let fused = fuse_stick_byte(current, contrib);
                // The clamp bounds are the property; the cast proves range.
                assert_eq!(fused as i32, (current as i32 + contrib).clamp(0, 255));
            }
        }
    }

    #[test]
    fn neutral_gyro_never_clears_the_default_threshold() {
        let params = GyroFusionParams::default();
        let mut x = 128;
        let mut y = 128;
        params.fuse(&[0, 0, 0], &mut x, &mut y);
        assert_eq!((x, y), (128, 128));

        // A hard tilt on the pitch axis moves only the Y byte.
        params.fuse(&[1000, 0, 0], &mut x, &mut y);
        assert_eq!(x, 128);
        assert_eq!(y, 255);
    }

    #[test]
    fn zero_mapping_divisor_is_rejected_at_construction() {
        assert!(GyroFusionParams::new(170, 0).is_err());
        assert!(GyroFusionParams::new(170, 10).is_ok());
    }

    #[test]
    fn random_macs_are_locally_administered_unicast() {
        for _ in 0..32 {
            let mac = random_mac();
            assert_eq!(mac[5] & 0x01, 0);
            assert_eq!(mac[5] & 0x02, 0x02);
        }
    }
}
