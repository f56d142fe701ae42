//! DualSense and DualSense Edge protocol engine.
use packed_struct::prelude::*;
use uhid_virt::{Bus, CreateParams};

use crate::crc::{append_crc, ReportCategory};
use crate::drivers::dualsense::driver::*;
use crate::drivers::dualsense::feature_report;
use crate::drivers::dualsense::hid_report::{
    BluetoothPackedInputDataReport, InputState, UsbPackedInputDataReport,
};
use crate::drivers::dualsense::report_descriptor::{
    DS_BT_DESCRIPTOR, DS_EDGE_BT_DESCRIPTOR, DS_EDGE_USB_DESCRIPTOR, DS_USB_DESCRIPTOR,
};
use crate::drivers::Direction;
use crate::status::GamepadStatus;
use crate::timing::TimestampSimulator;

use super::{
    format_mac, output_payload_offset, pack_stick_axis, GyroFusionParams, ProtocolEngine,
    ProtocolError, Transport,
};

pub struct DualSenseEngine {
    transport: Transport,
    edge: bool,
    mac: [u8; 6],
    fusion: GyroFusionParams,
    timing: TimestampSimulator,
    seq_number: u8,
    bt_seq: u8,
}

impl DualSenseEngine {
    pub fn new(transport: Transport, edge: bool, mac: [u8; 6], fusion: GyroFusionParams) -> Self {
        Self {
            transport,
            edge,
            mac,
            fusion,
            timing: TimestampSimulator::new(TIMESTAMP_INTERVAL),
            seq_number: 0,
            bt_seq: 0,
        }
    }

    fn build_state(&mut self, status: &GamepadStatus) -> InputState {
        let mut state = InputState::default();

        let mut lx = pack_stick_axis(status.joystick_positions[0][0]);
        let mut ly = pack_stick_axis(status.joystick_positions[0][1]);
        let mut rx = pack_stick_axis(status.joystick_positions[1][0]);
        let mut ry = pack_stick_axis(status.joystick_positions[1][1]);
        if status.join_left_analog_and_gyroscope {
            self.fusion.fuse(&status.raw_gyro, &mut lx, &mut ly);
        }
        if status.join_right_analog_and_gyroscope {
            self.fusion.fuse(&status.raw_gyro, &mut rx, &mut ry);
        }
        state.joystick_l_x = lx;
        state.joystick_l_y = ly;
        state.joystick_r_x = rx;
        state.joystick_r_y = ry;
        state.l2_trigger = status.l2_trigger;
        state.r2_trigger = status.r2_trigger;

        state.seq_number = self.seq_number;
        self.seq_number = self.seq_number.wrapping_add(1);

        state.triangle = status.triangle;
        state.circle = status.circle;
        state.cross = status.cross;
        state.square = status.square;
        state.dpad = Direction::from_status_byte(status.dpad);
        state.r3 = status.r3;
        state.l3 = status.l3;
        state.options = status.option;
        state.create = status.share;
        state.r2 = status.r2;
        state.l2 = status.l2;
        state.r1 = status.r1;
        state.l1 = status.l1;
        state.ps = status.center;
        if self.edge {
            state.left_paddle = status.l4;
            state.right_paddle = status.r4;
            state.left_fn = status.l5;
            state.right_fn = status.r5;
        }

        state.gyro_x = Integer::from_primitive(status.raw_gyro[0]);
        state.gyro_y = Integer::from_primitive(status.raw_gyro[1]);
        state.gyro_z = Integer::from_primitive(status.raw_gyro[2]);
        state.accel_x = Integer::from_primitive(status.raw_accel[0]);
        state.accel_y = Integer::from_primitive(status.raw_accel[1]);
        state.accel_z = Integer::from_primitive(status.raw_accel[2]);
        let timestamp = self.timing.advance(status.motion_time_ns / 1_000);
        state.sensor_timestamp = Integer::from_primitive(timestamp as u32);

        if status.touchpad.is_active() {
            let x = status.touchpad.x.min(TOUCHPAD_WIDTH - 1);
            let y = status.touchpad.y.min(TOUCHPAD_HEIGHT - 1);
            state.touch_data.touch_finger_data[0].set_active(x, y);
        }

        state
    }

    fn finish_feature(&self, mut buf: Vec<u8>) -> Vec<u8> {
        if self.transport.is_bluetooth() {
            append_crc(&mut buf, ReportCategory::Feature);
        }
        buf
    }
}

/// DualShock 4 compatibility rumble: the raw magnitude is doubled with the
/// low bit set for any non-zero value.
fn compat_rumble(raw: u8) -> u8 {
    (raw << 1) | u8::from(raw != 0)
}

impl ProtocolEngine for DualSenseEngine {
    fn create_params(&self) -> CreateParams {
        let (name, product, version) = if self.edge {
            (DS5_EDGE_NAME, DS5_EDGE_PID, DS5_EDGE_VERSION)
        } else {
            (DS5_NAME, DS5_PID, DS5_VERSION)
        };
        let (bus, rd_data) = match (self.edge, self.transport) {
            (false, Transport::Usb) => (Bus::USB, DS_USB_DESCRIPTOR.to_vec()),
            (false, Transport::Bluetooth) => (Bus::BLUETOOTH, DS_BT_DESCRIPTOR.to_vec()),
            (true, Transport::Usb) => (Bus::USB, DS_EDGE_USB_DESCRIPTOR.to_vec()),
            (true, Transport::Bluetooth) => (Bus::BLUETOOTH, DS_EDGE_BT_DESCRIPTOR.to_vec()),
        };
        CreateParams {
            name: name.to_string(),
            phys: String::new(),
            uniq: format_mac(&self.mac),
            bus,
            vendor: DS5_VID as u32,
            product: product as u32,
            version: version as u32,
            country: 0,
            rd_data,
        }
    }

    fn transport(&self) -> Transport {
        self.transport
    }

    fn compose_input_report(&mut self, status: &GamepadStatus) -> Result<Vec<u8>, ProtocolError> {
        let state = self.build_state(status);
        match self.transport {
            Transport::Usb => {
                let report = UsbPackedInputDataReport {
                    report_id: INPUT_REPORT_USB,
                    state,
                };
                Ok(report.pack()?.to_vec())
            }
            Transport::Bluetooth => {
                let mut report = BluetoothPackedInputDataReport {
                    seq_number: Integer::from_primitive(self.bt_seq),
                    state,
                    ..Default::default()
                };
                self.bt_seq = (self.bt_seq + 1) & 0x0F;
                let mut buf = report.pack()?.to_vec();
                append_crc(&mut buf, ReportCategory::Input);
                Ok(buf)
            }
        }
    }

    fn handle_output_report(
        &mut self,
        data: &[u8],
        status: &mut GamepadStatus,
    ) -> Result<(), ProtocolError> {
        let (expected_id, expected_len) = match self.transport {
            Transport::Usb => (OUTPUT_REPORT_USB, OUTPUT_REPORT_USB_SIZE),
            Transport::Bluetooth => (OUTPUT_REPORT_BT, OUTPUT_REPORT_BT_SIZE),
        };
        if data.len() != expected_len {
            return Err(ProtocolError::UnexpectedLength {
                expected: expected_len,
                got: data.len(),
            });
        }
        if data[0] != expected_id {
            return Err(ProtocolError::UnexpectedReportId { id: data[0] });
        }

        let payload = &data[output_payload_offset(self.transport, data[0])..];
        let flag0 = payload[OUTPUT_VALID_FLAG0];
        let flag1 = payload[OUTPUT_VALID_FLAG1];
        let flag2 = payload[OUTPUT_VALID_FLAG2];

        let compat = flag0 & VALID_FLAG0_COMPATIBLE_VIBRATION != 0
            || flag2 & VALID_FLAG2_COMPATIBLE_VIBRATION2 != 0;
        if compat || flag0 & VALID_FLAG0_HAPTICS_SELECT != 0 {
            let mut right = payload[OUTPUT_MOTOR_RIGHT];
            let mut left = payload[OUTPUT_MOTOR_LEFT];
            if compat {
                right = compat_rumble(right);
                left = compat_rumble(left);
            }
            status.set_rumble(right, left);
        }

        if flag1 & VALID_FLAG1_LIGHTBAR_CONTROL_ENABLE != 0 {
            status.set_leds(
                payload[OUTPUT_LIGHTBAR_RED],
                payload[OUTPUT_LIGHTBAR_GREEN],
                payload[OUTPUT_LIGHTBAR_BLUE],
            );
        }

        Ok(())
    }

    fn handle_feature_request(&mut self, report_number: u8) -> Option<Vec<u8>> {
        let reply = match report_number {
            FEATURE_REPORT_PAIRING_INFO => feature_report::pairing_report(&self.mac),
            FEATURE_REPORT_FIRMWARE_INFO => feature_report::firmware_report(),
            FEATURE_REPORT_CALIBRATION => feature_report::calibration_report(),
            _ => return None,
        };
        Some(self.finish_feature(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::verify_crc;

    fn usb_engine() -> DualSenseEngine {
        DualSenseEngine::new(
            Transport::Usb,
            false,
            [1, 2, 3, 4, 5, 6],
            GyroFusionParams::default(),
        )
    }

    fn bt_engine() -> DualSenseEngine {
        DualSenseEngine::new(
            Transport::Bluetooth,
            false,
            [1, 2, 3, 4, 5, 6],
            GyroFusionParams::default(),
        )
    }

    #[test]
    fn usb_lightbar_output_updates_leds_once() {
        let mut engine = usb_engine();
        let mut status = GamepadStatus::new();

        let mut data = vec![0u8; OUTPUT_REPORT_USB_SIZE];
        data[0] = OUTPUT_REPORT_USB;
        data[1 + OUTPUT_VALID_FLAG1] = VALID_FLAG1_LIGHTBAR_CONTROL_ENABLE;
        data[1 + OUTPUT_LIGHTBAR_RED] = 10;
        data[1 + OUTPUT_LIGHTBAR_GREEN] = 20;
        data[1 + OUTPUT_LIGHTBAR_BLUE] = 30;

        engine.handle_output_report(&data, &mut status).unwrap();
        assert_eq!(status.leds_colors, [10, 20, 30]);
        assert_eq!(status.leds_events_count, 1);
        assert_eq!(status.rumble_events_count, 0);
    }

    #[test]
    fn compatibility_vibration_doubles_and_sets_low_bit() {
        let mut engine = usb_engine();
        let mut status = GamepadStatus::new();

        let mut data = vec![0u8; OUTPUT_REPORT_USB_SIZE];
        data[0] = OUTPUT_REPORT_USB;
        data[1 + OUTPUT_VALID_FLAG0] = VALID_FLAG0_COMPATIBLE_VIBRATION;
        data[1 + OUTPUT_MOTOR_RIGHT] = 1;
        data[1 + OUTPUT_MOTOR_LEFT] = 0x7F;

        engine.handle_output_report(&data, &mut status).unwrap();
        assert_eq!(status.motors_intensity, [3, 0xFF]);
        assert_eq!(status.rumble_events_count, 1);

        // Zero magnitudes stay zero.
        data[1 + OUTPUT_MOTOR_RIGHT] = 0;
        data[1 + OUTPUT_MOTOR_LEFT] = 0;
        engine.handle_output_report(&data, &mut status).unwrap();
        assert_eq!(status.motors_intensity, [0, 0]);
    }

    #[test]
    fn wrong_output_length_is_rejected() {
        let mut engine = usb_engine();
        let mut status = GamepadStatus::new();
        let data = vec![OUTPUT_REPORT_USB; 10];
        assert!(engine.handle_output_report(&data, &mut status).is_err());
        assert_eq!(status.rumble_events_count, 0);
    }

    #[test]
    fn bluetooth_feature_replies_carry_a_valid_crc() {
        let mut engine = bt_engine();
        let reply = engine
            .handle_feature_request(FEATURE_REPORT_CALIBRATION)
            .unwrap();
        assert_eq!(reply.len(), FEATURE_REPORT_CALIBRATION_SIZE);
        assert!(verify_crc(&reply, ReportCategory::Feature));

        // Unknown report numbers are ignored without a reply.
        assert!(engine.handle_feature_request(0x42).is_none());
    }

    #[test]
    fn usb_feature_replies_carry_no_trailer() {
        let mut engine = usb_engine();
        let reply = engine
            .handle_feature_request(FEATURE_REPORT_PAIRING_INFO)
            .unwrap();
        assert_eq!(reply.len(), FEATURE_REPORT_PAIRING_INFO_SIZE);
        assert_eq!(&reply[1..7], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn bluetooth_input_reports_are_authenticated_and_sequenced() {
        let mut engine = bt_engine();
        let status = GamepadStatus::new();
        for cycle in 0..17u8 {
            let buf = engine.compose_input_report(&status).unwrap();
            assert_eq!(buf.len(), INPUT_REPORT_BT_SIZE);
            assert_eq!(buf[0], INPUT_REPORT_BT);
            // 4-bit sequence counter in the high nibble of byte 1.
            assert_eq!(buf[1] >> 4, cycle & 0x0F);
            assert!(verify_crc(&buf, ReportCategory::Input));
        }
    }

    #[test]
    fn edge_identity_surfaces_the_paddles() {
        let mut engine = DualSenseEngine::new(
            Transport::Usb,
            true,
            [1, 2, 3, 4, 5, 6],
            GyroFusionParams::default(),
        );
        let mut status = GamepadStatus::new();
        status.l4 = true;
        status.r5 = true;

        let buf = engine.compose_input_report(&status).unwrap();
        assert_eq!(buf.len(), INPUT_REPORT_USB_SIZE);
        // left paddle and right function button in byte 10.
        assert_eq!(buf[10], 0x40 | 0x20);

        let params = engine.create_params();
        assert_eq!(params.product, DS5_EDGE_PID as u32);
        assert_eq!(params.rd_data.len(), DS_EDGE_USB_DESCRIPTOR.len());
    }

    #[test]
    fn plain_identity_masks_the_paddles() {
        let mut engine = usb_engine();
        let mut status = GamepadStatus::new();
        status.l4 = true;
        status.r4 = true;
        let buf = engine.compose_input_report(&status).unwrap();
        assert_eq!(buf[10], 0x00);
    }
}
