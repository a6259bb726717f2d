use crate::{
    definitions::{display, keyboard},
    KeypadError,
};

#[cfg_attr(test, mockall::automock)]
/// The traits responsible for the display based code
pub trait DisplayCommands {
    /// Will display all from the pixels
    fn display(&mut self, pixels: &[[bool; display::WIDTH]]);
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for reading the keyboard data
pub trait KeyboardCommands {
    /// Returns the current state of all keys.
    fn poll_keys(&mut self) -> [bool; keyboard::SIZE];
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for the sound output
pub trait SoundCommands {
    /// The sound timer reached zero, the beep has to stop.
    fn cue_ended(&mut self);
}

/// Input is done with a hex keyboard that has 16 keys ranging `0-F`. The `8`, `4`, `6`, and
/// `2` keys are typically used for directional input. Three opcodes are used to detect input.
/// One skips an instruction if a specific key is pressed, while another does the same if a
/// specific key is not pressed. The third waits for a key press, and then stores it in one of
/// the data registers.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Keypad {
    keys: [bool; keyboard::SIZE],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad::default()
    }

    pub fn reset(&mut self) {
        self.keys = [false; keyboard::SIZE];
    }

    pub fn set_key(&mut self, key: usize, to: bool) -> Result<(), KeypadError> {
        let entry = self
            .keys
            .get_mut(key)
            .ok_or(KeypadError::InvalidKey(key))?;
        *entry = to;
        Ok(())
    }

    pub fn toggle_key(&mut self, key: usize) -> Result<(), KeypadError> {
        let current = self.is_pressed(key).ok_or(KeypadError::InvalidKey(key))?;
        self.set_key(key, !current)
    }

    pub fn set_mult(&mut self, keys: &[bool; keyboard::SIZE]) {
        self.keys = *keys;
    }

    pub fn is_pressed(&self, key: usize) -> Option<bool> {
        self.keys.get(key).copied()
    }

    /// Looks for the first pressed key in ascending order.
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|k| *k).map(|k| k as u8)
    }

    pub fn get_keys(&self) -> &[bool] {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_toggle_key() {
        let mut keypad = Keypad::new();
        assert_eq!(Ok(()), keypad.set_key(0xA, true));
        assert_eq!(Some(true), keypad.is_pressed(0xA));

        assert_eq!(Ok(()), keypad.toggle_key(0xA));
        assert_eq!(Some(false), keypad.is_pressed(0xA));
    }

    #[test]
    fn test_invalid_key() {
        let mut keypad = Keypad::new();
        assert_eq!(
            Err(KeypadError::InvalidKey(keyboard::SIZE)),
            keypad.set_key(keyboard::SIZE, true)
        );
        assert_eq!(
            Err(KeypadError::InvalidKey(0x20)),
            keypad.toggle_key(0x20)
        );
        assert_eq!(None, keypad.is_pressed(0x20));
    }

    #[test]
    fn test_first_pressed_is_lowest() {
        let mut keypad = Keypad::new();
        assert_eq!(None, keypad.first_pressed());

        let mut keys = [false; keyboard::SIZE];
        keys[0xC] = true;
        keys[0x3] = true;
        keypad.set_mult(&keys);

        assert_eq!(Some(0x3), keypad.first_pressed());

        keypad.reset();
        assert_eq!(None, keypad.first_pressed());
    }
}
