//! Shared state of the emulated gamepad. One [GamepadStatus] instance exists
//! per emulated controller and is written by the input-capture side and by
//! the report interpreter (rumble/LED), and read in full by the report
//! composer once per emission cycle.
use std::sync::{Arc, Mutex};

/// Transient UI-interaction flag: a virtual button press-and-release is in
/// flight and capture-side writes to that button should be suppressed.
pub const STATUS_FLAG_PRESS_AND_RELEASE: u32 = 1 << 0;

/// D-pad nibble value for "centered" on either axis.
pub const DPAD_NEUTRAL: u8 = 0x00;

/// A single touchpad contact. `id` is -1 when no finger is down.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TouchContact {
    pub id: i8,
    pub x: u16,
    pub y: u16,
}

impl Default for TouchContact {
    fn default() -> Self {
        Self { id: -1, x: 0, y: 0 }
    }
}

impl TouchContact {
    pub fn is_active(&self) -> bool {
        self.id >= 0
    }
}

/// Canonical mutable snapshot of the emulated controller.
///
/// All access must go through the owning [SharedGamepadStatus] lock, held for
/// the full duration of a multi-field read or write so the composer never
/// observes a torn gesture (e.g. one half of a joystick pair).
#[derive(Debug, Clone, PartialEq)]
pub struct GamepadStatus {
    // Face and shoulder buttons
    pub cross: bool,
    pub circle: bool,
    pub square: bool,
    pub triangle: bool,
    pub l1: bool,
    pub r1: bool,
    pub l2: bool,
    pub r2: bool,
    pub l3: bool,
    pub r3: bool,
    pub option: bool,
    pub share: bool,
    pub center: bool,
    // Rear paddles (only surfaced by the DualSense Edge identity)
    pub l4: bool,
    pub r4: bool,
    pub l5: bool,
    pub r5: bool,

    /// Stick positions as `[[lx, ly], [rx, ry]]`, signed with center 0.
    pub joystick_positions: [[i16; 2]; 2],
    pub l2_trigger: u8,
    pub r2_trigger: u8,

    /// Two 4-bit axes packed in one byte: high nibble vertical
    /// (0 neutral, 1 up, 2 down), low nibble horizontal
    /// (0 neutral, 1 right, 2 left).
    pub dpad: u8,

    /// Raw sensor counts as they will appear on the wire.
    pub raw_gyro: [i16; 3],
    pub raw_accel: [i16; 3],
    /// Physically converted counterparts (rad/s, m/s^2).
    pub gyro: [f64; 3],
    pub accel: [f64; 3],
    /// Timestamp of the last motion sample, nanoseconds.
    pub motion_time_ns: u64,

    /// `[right (weak), left (strong)]` motor intensities.
    pub motors_intensity: [u8; 2],
    pub rumble_events_count: u64,

    pub leds_colors: [u8; 3],
    pub leds_events_count: u64,

    pub touchpad: TouchContact,

    pub join_left_analog_and_gyroscope: bool,
    pub join_right_analog_and_gyroscope: bool,

    /// Bitmask of transient UI-interaction flags, see `STATUS_FLAG_*`.
    pub flags: u32,
}

impl Default for GamepadStatus {
    fn default() -> Self {
        Self {
            cross: false,
            circle: false,
            square: false,
            triangle: false,
            l1: false,
            r1: false,
            l2: false,
            r2: false,
            l3: false,
            r3: false,
            option: false,
            share: false,
            center: false,
            l4: false,
            r4: false,
            l5: false,
            r5: false,
            joystick_positions: [[0, 0], [0, 0]],
            l2_trigger: 0,
            r2_trigger: 0,
            dpad: DPAD_NEUTRAL,
            raw_gyro: [0, 0, 0],
            raw_accel: [0, 0, 0],
            gyro: [0.0, 0.0, 0.0],
            accel: [0.0, 0.0, 0.0],
            motion_time_ns: 0,
            motors_intensity: [0, 0],
            rumble_events_count: 0,
            leds_colors: [0, 0, 0],
            leds_events_count: 0,
            touchpad: TouchContact::default(),
            join_left_analog_and_gyroscope: false,
            join_right_analog_and_gyroscope: false,
            flags: 0,
        }
    }
}

impl GamepadStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rumble command from the host driver.
    pub fn set_rumble(&mut self, right: u8, left: u8) {
        self.motors_intensity = [right, left];
        self.rumble_events_count = self.rumble_events_count.wrapping_add(1);
    }

    /// Record a lightbar color change from the host driver.
    pub fn set_leds(&mut self, r: u8, g: u8, b: u8) {
        self.leds_colors = [r, g, b];
        self.leds_events_count = self.leds_events_count.wrapping_add(1);
    }

    /// Apply a single field update from the capture side.
    pub fn apply(&mut self, update: StatusUpdate) {
        match update {
            StatusUpdate::Button(button, pressed) => self.set_button(button, pressed),
            StatusUpdate::LeftStick(x, y) => self.joystick_positions[0] = [x, y],
            StatusUpdate::RightStick(x, y) => self.joystick_positions[1] = [x, y],
            StatusUpdate::LeftTrigger(value) => self.l2_trigger = value,
            StatusUpdate::RightTrigger(value) => self.r2_trigger = value,
            StatusUpdate::DPad(value) => self.dpad = value,
            StatusUpdate::Motion {
                raw_gyro,
                raw_accel,
                gyro,
                accel,
                time_ns,
            } => {
                self.raw_gyro = raw_gyro;
                self.raw_accel = raw_accel;
                self.gyro = gyro;
                self.accel = accel;
                self.motion_time_ns = time_ns;
            }
            StatusUpdate::Touch(contact) => self.touchpad = contact,
            StatusUpdate::JoinLeftAnalogAndGyro(join) => {
                self.join_left_analog_and_gyroscope = join
            }
            StatusUpdate::JoinRightAnalogAndGyro(join) => {
                self.join_right_analog_and_gyroscope = join
            }
        }
    }

    fn set_button(&mut self, button: GamepadButton, pressed: bool) {
        if self.flags & STATUS_FLAG_PRESS_AND_RELEASE != 0 {
            // A synthetic press-and-release owns the button state right now.
            return;
        }
        match button {
            GamepadButton::Cross => self.cross = pressed,
            GamepadButton::Circle => self.circle = pressed,
            GamepadButton::Square => self.square = pressed,
            GamepadButton::Triangle => self.triangle = pressed,
            GamepadButton::L1 => self.l1 = pressed,
            GamepadButton::R1 => self.r1 = pressed,
            GamepadButton::L2 => self.l2 = pressed,
            GamepadButton::R2 => self.r2 = pressed,
            GamepadButton::L3 => self.l3 = pressed,
            GamepadButton::R3 => self.r3 = pressed,
            GamepadButton::Option => self.option = pressed,
            GamepadButton::Share => self.share = pressed,
            GamepadButton::Center => self.center = pressed,
            GamepadButton::L4 => self.l4 = pressed,
            GamepadButton::R4 => self.r4 = pressed,
            GamepadButton::L5 => self.l5 = pressed,
            GamepadButton::R5 => self.r5 = pressed,
        }
    }
}

/// Logical buttons of the emulated pad.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GamepadButton {
    Cross,
    Circle,
    Square,
    Triangle,
    L1,
    R1,
    L2,
    R2,
    L3,
    R3,
    Option,
    Share,
    Center,
    L4,
    R4,
    L5,
    R5,
}

/// A single update delivered over the status channel from the capture side.
#[derive(Debug, Clone)]
pub enum StatusUpdate {
    Button(GamepadButton, bool),
    LeftStick(i16, i16),
    RightStick(i16, i16),
    LeftTrigger(u8),
    RightTrigger(u8),
    /// Packed two-nibble d-pad byte, see [GamepadStatus::dpad].
    DPad(u8),
    Motion {
        raw_gyro: [i16; 3],
        raw_accel: [i16; 3],
        gyro: [f64; 3],
        accel: [f64; 3],
        time_ns: u64,
    },
    Touch(TouchContact),
    JoinLeftAnalogAndGyro(bool),
    JoinRightAnalogAndGyro(bool),
}

/// Handle to a [GamepadStatus] guarded by its single lock.
pub type SharedGamepadStatus = Arc<Mutex<GamepadStatus>>;

/// Create a new shared status instance in its neutral state.
pub fn new_shared_status() -> SharedGamepadStatus {
    Arc::new(Mutex::new(GamepadStatus::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rumble_and_led_updates_bump_event_counters() {
        let mut status = GamepadStatus::new();
        status.set_rumble(10, 20);
        status.set_rumble(10, 20);
        assert_eq!(status.motors_intensity, [10, 20]);
        assert_eq!(status.rumble_events_count, 2);

        status.set_leds(1, 2, 3);
        assert_eq!(status.leds_colors, [1, 2, 3]);
        assert_eq!(status.leds_events_count, 1);
    }

    #[test]
    fn press_and_release_flag_suppresses_button_updates() {
        let mut status = GamepadStatus::new();
        status.flags |= STATUS_FLAG_PRESS_AND_RELEASE;
        status.apply(StatusUpdate::Button(GamepadButton::Cross, true));
        assert!(!status.cross);

        status.flags = 0;
        status.apply(StatusUpdate::Button(GamepadButton::Cross, true));
        assert!(status.cross);
    }

    #[test]
    fn stick_updates_apply_as_pairs() {
        let mut status = GamepadStatus::new();
        status.apply(StatusUpdate::LeftStick(-32768, 32767));
        status.apply(StatusUpdate::RightStick(100, -100));
        assert_eq!(status.joystick_positions, [[-32768, 32767], [100, -100]]);
    }
}
