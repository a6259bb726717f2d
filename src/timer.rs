/// Represents a timer inside of the chip
/// infrastruture, it will count down to
/// zero from what ever number given, once per tick.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Timer {
    value: u8,
}

impl Timer {
    /// Will create a new timer with the given value.
    pub fn new(value: u8) -> Self {
        Self { value }
    }

    /// Will set the value from which the timer shall count down from.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    /// Will get the value that the counter is currently at.
    pub fn get_value(&self) -> u8 {
        self.value
    }

    /// Decrements the counter, never below zero.
    /// Returns the value before the decrement.
    pub fn tick(&mut self) -> u8 {
        let before = self.value;
        self.value = before.saturating_sub(1);
        before
    }
}

/// The events the timers can emit during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The sound timer went from `1` to `0`, the beep is over.
    CueEnded,
}

/// Delay timer: This timer is intended to be used for timing the events of games. Its value
/// can be set and read.
///
/// Sound timer: This timer is used for sound effects. When its value is nonzero, a beeping
/// sound is made.
///
/// Both count down once per tick, the host has to drive [`Timers::tick`] at 60 hertz.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Timers {
    pub(crate) delay: Timer,
    pub(crate) sound: Timer,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn tick(&mut self) -> Option<TimerEvent> {
        self.delay.tick();
        match self.sound.tick() {
            1 => {
                log::debug!("sound cue ended");
                Some(TimerEvent::CueEnded)
            }
            _ => None,
        }
    }

    pub fn delay(&self) -> u8 {
        self.delay.get_value()
    }

    pub fn set_delay(&mut self, value: u8) {
        self.delay.set_value(value);
    }

    pub fn sound(&self) -> u8 {
        self.sound.get_value()
    }

    pub fn set_sound(&mut self, value: u8) {
        self.sound.set_value(value);
    }

    /// The sound should be audible while this holds.
    pub fn is_sound_active(&self) -> bool {
        self.sound() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::timer;

    #[test]
    fn test_timer() {
        let mut timer = Timer::new(timer::HERTZ as u8);

        for _ in 0..timer::HERTZ {
            timer.tick();
        }
        assert_eq!(timer.get_value(), 0);

        // stays at zero
        assert_eq!(timer.tick(), 0);
        assert_eq!(timer.get_value(), 0);
    }

    #[test]
    fn test_timer_set_value() {
        let mut timer = Timer::default();
        assert_eq!(timer.get_value(), 0);

        timer.set_value(2);
        assert_eq!(timer.tick(), 2);
        assert_eq!(timer.get_value(), 1);
    }

    #[test]
    fn test_delay_never_below_zero() {
        let mut timers = Timers::new();
        timers.set_delay(5);

        for _ in 0..61 {
            assert_eq!(timers.tick(), None);
        }
        assert_eq!(timers.delay(), 0);
    }

    #[test]
    fn test_cue_ended_emitted_once() {
        let mut timers = Timers::new();
        timers.set_sound(3);
        assert!(timers.is_sound_active());

        let events: Vec<_> = (0..10).map(|_| timers.tick()).collect();

        assert_eq!(
            events.iter().filter(|e| **e == Some(TimerEvent::CueEnded)).count(),
            1
        );
        assert_eq!(events[2], Some(TimerEvent::CueEnded));
        assert!(!timers.is_sound_active());
    }

    #[test]
    fn test_timers_are_independent() {
        let mut timers = Timers::new();
        timers.set_delay(2);
        timers.set_sound(1);

        assert_eq!(timers.tick(), Some(TimerEvent::CueEnded));
        assert_eq!(timers.delay(), 1);
        assert_eq!(timers.tick(), None);
        assert_eq!(timers.delay(), 0);
    }
}
