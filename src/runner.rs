use std::time::Duration;

use crate::{
    chip8::ChipSet,
    definitions::{cpu, timer},
    devices::{DisplayCommands, KeyboardCommands, SoundCommands},
    opcode::Operation,
    timer::TimerEvent,
    ProcessError,
};

/// Paces a [`ChipSet`] against the wall clock of the host.
///
/// The host calls [`Runner::advance`] with the time that passed since the
/// last call, the runner then executes as many steps and timer ticks as fit
/// into that time and forwards the results to the devices. No threads are
/// spawned, the host owns the loop.
pub struct Runner<D, K, S>
where
    D: DisplayCommands,
    K: KeyboardCommands,
    S: SoundCommands,
{
    chip: ChipSet,
    display: D,
    keyboard: K,
    sound: S,
    cpu_interval: Duration,
    timer_interval: Duration,
    cpu_budget: Duration,
    timer_budget: Duration,
}

impl<D, K, S> Runner<D, K, S>
where
    D: DisplayCommands,
    K: KeyboardCommands,
    S: SoundCommands,
{
    /// Runs the chip at the default rate of [`cpu::HERTZ`].
    pub fn new(chip: ChipSet, display: D, keyboard: K, sound: S) -> Self {
        Self {
            chip,
            display,
            keyboard,
            sound,
            cpu_interval: cpu::INTERVAL,
            timer_interval: timer::INTERVAL,
            cpu_budget: Duration::ZERO,
            timer_budget: Duration::ZERO,
        }
    }

    /// Runs the chip at the given rate, the timers stay at 60 hertz.
    /// A rate of zero is treated as one step per second, rates above one
    /// step per nanosecond are capped there.
    pub fn with_hertz(mut self, hertz: u64) -> Self {
        let nanos = (1_000_000_000 / hertz.max(1)).max(1);
        self.cpu_interval = Duration::from_nanos(nanos);
        self
    }

    /// Will advance the emulation by the elapsed time.
    ///
    /// Fatal stack faults stop the advance and are handed to the host, the
    /// chip is left as it was at the fault.
    pub fn advance(&mut self, elapsed: Duration) -> Result<(), ProcessError> {
        let keys = self.keyboard.poll_keys();
        self.chip.set_keyboard(&keys);

        self.cpu_budget += elapsed;
        while self.cpu_budget >= self.cpu_interval {
            self.cpu_budget -= self.cpu_interval;

            let step = self.chip.next()?;
            match step.operation {
                Operation::Draw => self.display.display(self.chip.get_display()),
                // no point in spinning until the keys are polled again
                Operation::Wait => {
                    self.cpu_budget = Duration::ZERO;
                    break;
                }
                Operation::None => {}
            }
        }

        self.timer_budget += elapsed;
        while self.timer_budget >= self.timer_interval {
            self.timer_budget -= self.timer_interval;

            if let Some(TimerEvent::CueEnded) = self.chip.tick() {
                self.sound.cue_ended();
            }
        }

        Ok(())
    }

    pub fn chip(&self) -> &ChipSet {
        &self.chip
    }

    pub fn chip_mut(&mut self) -> &mut ChipSet {
        &mut self.chip
    }

    /// Hands back the chip and the devices.
    pub fn into_parts(self) -> (ChipSet, D, K, S) {
        (self.chip, self.display, self.keyboard, self.sound)
    }
}
