//! Joystick slots
//!
//! Slot 0 (primary) drives paddle 1 and is opened at startup if a device is
//! plugged in. Slot 1 (secondary) drives paddle 2 and only exists in
//! two-player mode.

use sdl2::JoystickSubsystem;
use sdl2::joystick::Joystick;

use crate::input::StickState;

/// SDL's vertical axis
const VERTICAL_AXIS: u32 = 1;

/// Map a raw SDL axis reading to -1.0..=1.0 with up positive.
/// SDL reports up as negative.
#[inline]
pub fn normalize_axis(raw: i16) -> f32 {
    -(raw as f32 / i16::MAX as f32).clamp(-1.0, 1.0)
}

fn open(subsystem: &JoystickSubsystem, index: u32) -> Option<Joystick> {
    let available = subsystem.num_joysticks().unwrap_or_else(|e| {
        log::warn!("Could not count joysticks: {e}");
        0
    });
    if index >= available {
        return None;
    }
    match subsystem.open(index) {
        Ok(joystick) => {
            log::info!("Opened joystick {}: {}", index, joystick.name());
            Some(joystick)
        }
        Err(e) => {
            log::warn!("Could not open joystick {}: {}", index, e);
            None
        }
    }
}

fn vertical(joystick: &Option<Joystick>) -> Option<f32> {
    let joystick = joystick.as_ref()?;
    joystick.axis(VERTICAL_AXIS).ok().map(normalize_axis)
}

/// Up to two open joysticks
#[derive(Default)]
pub struct JoystickSlots {
    primary: Option<Joystick>,
    secondary: Option<Joystick>,
}

impl JoystickSlots {
    pub fn open_primary(&mut self, subsystem: &JoystickSubsystem) {
        self.primary = open(subsystem, 0);
    }

    pub fn open_secondary(&mut self, subsystem: &JoystickSubsystem) {
        if self.secondary.is_none() {
            self.secondary = open(subsystem, 1);
        }
    }

    pub fn close_secondary(&mut self) {
        if self.secondary.take().is_some() {
            log::info!("Closed joystick 1");
        }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }

    /// Current vertical deflection of each open stick
    pub fn sticks(&self) -> StickState {
        StickState {
            primary: vertical(&self.primary),
            secondary: vertical(&self.secondary),
        }
    }

    /// Close everything
    pub fn close_all(&mut self) {
        self.close_secondary();
        if self.primary.take().is_some() {
            log::info!("Closed joystick 0");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_axis_up_is_positive() {
        assert_eq!(normalize_axis(0), 0.0);
        assert!((normalize_axis(i16::MIN) - 1.0).abs() < 1e-6);
        assert!((normalize_axis(i16::MAX) + 1.0).abs() < 1e-6);
        assert!((normalize_axis(-16384) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_empty_slots() {
        let slots = JoystickSlots::default();
        assert!(!slots.has_primary());
        assert!(!slots.has_secondary());
        assert_eq!(slots.sticks(), StickState::default());
    }
}
