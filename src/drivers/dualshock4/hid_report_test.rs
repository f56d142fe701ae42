use std::error::Error;

use packed_struct::prelude::*;

use crate::drivers::dualshock4::driver::*;
use crate::drivers::dualshock4::hid_report::{
    BluetoothPackedInputDataReport, TouchFingerData, UsbPackedInputDataReport,
};
use crate::drivers::Direction;

#[tokio::test]
async fn test_touch_finger_packing() -> Result<(), Box<dyn Error>> {
    let mut finger = TouchFingerData::default();
    finger.set_active(3, 1919, 940);
    assert_eq!(finger.contact, 0x03);
    assert_eq!(finger.get_x(), 1919);
    assert_eq!(finger.get_y(), 940);
    assert_eq!(finger.pack_to_vec()?, vec![0x03, 0x7F, 0xC7, 0x3A]);

    finger.set_inactive();
    assert_eq!(finger.contact, TOUCH_CONTACT_INACTIVE);
    Ok(())
}

#[tokio::test]
async fn test_usb_framing() -> Result<(), Box<dyn Error>> {
    let mut report = UsbPackedInputDataReport::default();
    report.state.cross = true;
    report.state.dpad = Direction::NorthEast;
    report.state.counter = Integer::from_primitive(5);

    let buf = report.pack_to_vec()?;
    assert_eq!(buf.len(), INPUT_REPORT_USB_SIZE);
    assert_eq!(buf[0], INPUT_REPORT_USB);
    assert_eq!(&buf[1..5], &[127, 127, 127, 127]);
    // Face buttons share byte 5 with the hat nibble.
    assert_eq!(buf[5], (1 << 5) | 0x01);
    // Counter occupies the high six bits of byte 7.
    assert_eq!(buf[7], 5 << 2);
    // Cable plugged with a full battery nibble.
    assert_eq!(buf[30], STATUS_CHARGING_CABLE);
    Ok(())
}

#[tokio::test]
async fn test_bt_framing() -> Result<(), Box<dyn Error>> {
    let mut report = BluetoothPackedInputDataReport::default();
    report.state.l1 = true;

    let buf = report.pack_to_vec()?;
    assert_eq!(buf.len(), INPUT_REPORT_BT_SIZE);
    assert_eq!(buf[0], INPUT_REPORT_BT);
    assert_eq!(buf[1], BT_INPUT_FLAGS);
    // The embedded state starts at byte 3 with the same layout as USB, so
    // the released hat nibble lands in byte 7 and l1 in byte 8.
    assert_eq!(buf[7], 0x08);
    assert_eq!(buf[8], 0x01);
    assert_eq!(&buf[74..78], &[0, 0, 0, 0]);
    Ok(())
}
