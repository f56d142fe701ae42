//! DualShock 4 protocol engine.
use packed_struct::prelude::*;
use uhid_virt::{Bus, CreateParams};

use crate::crc::{append_crc, ReportCategory};
use crate::drivers::dualshock4::driver::*;
use crate::drivers::dualshock4::feature_report;
use crate::drivers::dualshock4::hid_report::{
    BluetoothPackedInputDataReport, InputState, UsbPackedInputDataReport,
};
use crate::drivers::dualshock4::report_descriptor::{DS4_BT_DESCRIPTOR, DS4_USB_DESCRIPTOR};
use crate::drivers::Direction;
use crate::status::GamepadStatus;
use crate::timing::TimestampSimulator;

use super::{
    format_mac, output_payload_offset, pack_stick_axis, GyroFusionParams, ProtocolEngine,
    ProtocolError, Transport,
};

pub struct DualShock4Engine {
    transport: Transport,
    mac: [u8; 6],
    fusion: GyroFusionParams,
    timing: TimestampSimulator,
    counter: u8,
}

impl DualShock4Engine {
    pub fn new(transport: Transport, mac: [u8; 6], fusion: GyroFusionParams) -> Self {
        Self {
            transport,
            mac,
            fusion,
            timing: TimestampSimulator::new(TIMESTAMP_INTERVAL),
            counter: 0,
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

        state.triangle = status.triangle;
        state.circle = status.circle;
        state.cross = status.cross;
        state.square = status.square;
        state.dpad = Direction::from_status_byte(status.dpad);
        state.r3 = status.r3;
        state.l3 = status.l3;
        state.options = status.option;
        state.share = status.share;
        state.r2 = status.r2;
        state.l2 = status.l2;
        state.r1 = status.r1;
        state.l1 = status.l1;
        state.ps = status.center;

        state.counter = Integer::from_primitive(self.counter);
        self.counter = (self.counter + 1) & 0x3F;

        state.gyro_x = Integer::from_primitive(status.raw_gyro[0]);
        state.gyro_y = Integer::from_primitive(status.raw_gyro[1]);
        state.gyro_z = Integer::from_primitive(status.raw_gyro[2]);
        state.accel_x = Integer::from_primitive(status.raw_accel[0]);
        state.accel_y = Integer::from_primitive(status.raw_accel[1]);
        state.accel_z = Integer::from_primitive(status.raw_accel[2]);
        let timestamp = self.timing.advance(status.motion_time_ns / 1_000);
        state.timestamp = Integer::from_primitive(timestamp as u16);

        state
    }
}

impl ProtocolEngine for DualShock4Engine {
    fn create_params(&self) -> CreateParams {
        let (bus, rd_data) = match self.transport {
            Transport::Usb => (Bus::USB, DS4_USB_DESCRIPTOR.to_vec()),
            Transport::Bluetooth => (Bus::BLUETOOTH, DS4_BT_DESCRIPTOR.to_vec()),
        };
        CreateParams {
            name: DS4_NAME.to_string(),
            phys: String::new(),
            uniq: format_mac(&self.mac),
            bus,
            vendor: DS4_VID as u32,
            product: DS4_PID as u32,
            version: DS4_VERSION as u32,
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
                let report = BluetoothPackedInputDataReport {
                    state,
                    ..Default::default()
                };
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

        if flag0 & VALID_FLAG0_MOTOR != 0 {
            status.set_rumble(payload[OUTPUT_MOTOR_RIGHT], payload[OUTPUT_MOTOR_LEFT]);
        }
        if flag0 & VALID_FLAG0_LED != 0 {
            status.set_leds(
                payload[OUTPUT_LIGHTBAR_RED],
                payload[OUTPUT_LIGHTBAR_GREEN],
                payload[OUTPUT_LIGHTBAR_BLUE],
            );
        }

        Ok(())
    }

    fn handle_feature_request(&mut self, report_number: u8) -> Option<Vec<u8>> {
        match (self.transport, report_number) {
            (_, FEATURE_REPORT_PAIRING_INFO) => Some(feature_report::pairing_report(&self.mac)),
            (_, FEATURE_REPORT_FIRMWARE_INFO) => {
                let mut buf = feature_report::firmware_report();
                if self.transport.is_bluetooth() {
                    append_crc(&mut buf, ReportCategory::Feature);
                }
                Some(buf)
            }
            (Transport::Usb, FEATURE_REPORT_CALIBRATION) => {
                Some(feature_report::calibration_report())
            }
            (Transport::Bluetooth, FEATURE_REPORT_CALIBRATION_BT) => {
                let mut buf = feature_report::calibration_report_bt();
                append_crc(&mut buf, ReportCategory::Feature);
                Some(buf)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::verify_crc;
    use crate::status::DPAD_NEUTRAL;

    fn usb_engine() -> DualShock4Engine {
        DualShock4Engine::new(Transport::Usb, [1, 2, 3, 4, 5, 6], GyroFusionParams::default())
    }

    fn bt_engine() -> DualShock4Engine {
        DualShock4Engine::new(
            Transport::Bluetooth,
            [1, 2, 3, 4, 5, 6],
            GyroFusionParams::default(),
        )
    }

    #[test]
    fn cross_and_northeast_compose_to_the_documented_bytes() {
        let mut engine = usb_engine();
        let mut status = GamepadStatus::new();
        status.cross = true;
        status.dpad = 0x11; // up + right
        status.joystick_positions[0] = [0, 0];

        let buf = engine.compose_input_report(&status).unwrap();
        assert_eq!(buf.len(), INPUT_REPORT_USB_SIZE);
        assert_eq!(buf[0], INPUT_REPORT_USB);
        assert_eq!(buf[1], 128);
        assert_eq!(buf[2], 128);
        // cross bit plus north-east hat nibble.
        assert_eq!(buf[5], 0x20 | 0x01);

        status.dpad = DPAD_NEUTRAL;
        let buf = engine.compose_input_report(&status).unwrap();
        assert_eq!(buf[5] & 0x0F, 0x08);
    }

    #[test]
    fn frame_counter_wraps_at_six_bits() {
        let mut engine = usb_engine();
        let status = GamepadStatus::new();
        for cycle in 0..130u32 {
            let buf = engine.compose_input_report(&status).unwrap();
            assert_eq!(buf[7] >> 2, (cycle & 0x3F) as u8);
        }
    }

    #[test]
    fn bluetooth_input_reports_are_authenticated() {
        let mut engine = bt_engine();
        let status = GamepadStatus::new();
        let buf = engine.compose_input_report(&status).unwrap();
        assert_eq!(buf.len(), INPUT_REPORT_BT_SIZE);
        assert_eq!(buf[0], INPUT_REPORT_BT);
        assert_eq!(buf[1], BT_INPUT_FLAGS);
        assert!(verify_crc(&buf, ReportCategory::Input));
    }

    #[test]
    fn rumble_output_updates_motors() {
        let mut engine = usb_engine();
        let mut status = GamepadStatus::new();

        let mut data = vec![0u8; OUTPUT_REPORT_USB_SIZE];
        data[0] = OUTPUT_REPORT_USB;
        data[1 + OUTPUT_VALID_FLAG0] = VALID_FLAG0_MOTOR;
        data[1 + OUTPUT_MOTOR_RIGHT] = 40;
        data[1 + OUTPUT_MOTOR_LEFT] = 200;

        engine.handle_output_report(&data, &mut status).unwrap();
        assert_eq!(status.motors_intensity, [40, 200]);
        assert_eq!(status.rumble_events_count, 1);
        // LED flag was clear, so the lightbar state is untouched.
        assert_eq!(status.leds_events_count, 0);
    }

    #[test]
    fn bluetooth_output_skips_the_header_pair() {
        let mut engine = bt_engine();
        let mut status = GamepadStatus::new();

        let mut data = vec![0u8; OUTPUT_REPORT_BT_SIZE];
        data[0] = OUTPUT_REPORT_BT;
        data[2 + OUTPUT_VALID_FLAG0] = VALID_FLAG0_LED;
        data[2 + OUTPUT_LIGHTBAR_RED] = 1;
        data[2 + OUTPUT_LIGHTBAR_GREEN] = 2;
        data[2 + OUTPUT_LIGHTBAR_BLUE] = 3;

        engine.handle_output_report(&data, &mut status).unwrap();
        assert_eq!(status.leds_colors, [1, 2, 3]);
    }

    #[test]
    fn calibration_report_id_depends_on_transport() {
        let mut usb = usb_engine();
        let reply = usb.handle_feature_request(FEATURE_REPORT_CALIBRATION).unwrap();
        assert_eq!(reply.len(), FEATURE_REPORT_CALIBRATION_SIZE);
        assert!(usb
            .handle_feature_request(FEATURE_REPORT_CALIBRATION_BT)
            .is_none());

        let mut bt = bt_engine();
        let reply = bt
            .handle_feature_request(FEATURE_REPORT_CALIBRATION_BT)
            .unwrap();
        assert_eq!(reply.len(), FEATURE_REPORT_CALIBRATION_BT_SIZE);
        assert!(verify_crc(&reply, ReportCategory::Feature));
    }
}
