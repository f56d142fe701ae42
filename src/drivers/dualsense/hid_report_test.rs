use std::error::Error;

use packed_struct::prelude::*;

use crate::drivers::dualsense::driver::*;
use crate::drivers::dualsense::hid_report::{
    BluetoothPackedInputDataReport, TouchFingerData, UsbPackedInputDataReport,
};
use crate::drivers::Direction;

#[tokio::test]
async fn test_touch_finger_packing() -> Result<(), Box<dyn Error>> {
    let mut finger = TouchFingerData::default();
    finger.set_y(1068);
    finger.set_x(1919);
    assert_eq!(finger.get_y(), 1068);
    assert_eq!(finger.get_x(), 1919);

    // Inactive slot at the touchpad's far corner.
    assert_eq!(finger.pack_to_vec()?, vec![0x80, 0x7F, 0xC7, 0x42]);

    finger.set_active(1919, 1068);
    assert_eq!(finger.pack_to_vec()?, vec![0x7F, 0x7F, 0xC7, 0x42]);

    finger.set_inactive();
    assert_eq!(finger.contact, TOUCH_CONTACT_INACTIVE);
    assert_eq!(finger.get_x(), 0);
    Ok(())
}

#[tokio::test]
async fn test_usb_framing() -> Result<(), Box<dyn Error>> {
    let mut report = UsbPackedInputDataReport::default();
    report.state.cross = true;
    report.state.dpad = Direction::NorthEast;

    let buf = report.pack_to_vec()?;
    assert_eq!(buf.len(), INPUT_REPORT_USB_SIZE);
    assert_eq!(buf[0], INPUT_REPORT_USB);
    // Idle sticks report mid-range.
    assert_eq!(&buf[1..5], &[127, 127, 127, 127]);
    // Face buttons share byte 8 with the hat nibble.
    assert_eq!(buf[8], (1 << 5) | 0x01);
    Ok(())
}

#[tokio::test]
async fn test_bt_framing() -> Result<(), Box<dyn Error>> {
    let mut report = BluetoothPackedInputDataReport::default();
    report.seq_number = Integer::from_primitive(0x0B);
    report.state.square = true;

    let buf = report.pack_to_vec()?;
    assert_eq!(buf.len(), INPUT_REPORT_BT_SIZE);
    assert_eq!(buf[0], INPUT_REPORT_BT);
    // Sequence nibble in the high bits of byte 1, HID-data flag set.
    assert_eq!(buf[1], 0xB1);
    // The embedded state starts at byte 2 with the same layout as USB.
    assert_eq!(buf[9], (1 << 4) | 0x08);
    // CRC trailer is left zeroed for the authenticator.
    assert_eq!(&buf[74..78], &[0, 0, 0, 0]);
    Ok(())
}
