use std::time::{Duration, Instant};

use super::StopSignal;

/// Longest single sleep, so a stop request is noticed mid-pause.
const SLICE: Duration = Duration::from_millis(25);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    Elapsed,
    Interrupted,
}

/// Paces frames so consecutive frame starts are `target_delta_time` apart.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
    stop_signal: StopSignal,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration, stop_signal: StopSignal) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
            stop_signal,
        }
    }

    pub fn start_frame(&mut self) {
        self.last_instant = Some(Instant::now());
    }

    /// Sleeps out the rest of the frame, or returns early once a stop was requested.
    pub fn sleep(&mut self) -> Pause {
        let deadline = self.last_instant.unwrap_or_else(Instant::now) + self.target_delta_time;

        loop {
            if self.stop_signal.is_stopped() {
                return Pause::Interrupted;
            }

            let now = Instant::now();
            if now >= deadline {
                return Pause::Elapsed;
            }

            spin_sleep::sleep((deadline - now).min(SLICE));
        }
    }

    pub fn in_time(&self) -> bool {
        if let Some(last_instant) = self.last_instant {
            Instant::now().duration_since(last_instant) < self.target_delta_time
        } else {
            // Nothing to be late for before the first frame.
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn zero_delay_returns_immediately() {
        let mut sleeper = Sleeper::new(Duration::ZERO, StopSignal::new());
        sleeper.start_frame();

        assert_eq!(sleeper.sleep(), Pause::Elapsed);
    }

    #[test]
    fn waits_out_the_frame() {
        let mut sleeper = Sleeper::new(Duration::from_millis(30), StopSignal::new());
        sleeper.start_frame();

        let started = Instant::now();
        assert_eq!(sleeper.sleep(), Pause::Elapsed);
        assert!(started.elapsed() >= Duration::from_millis(25));
        assert!(!sleeper.in_time());
    }

    #[test]
    fn stop_interrupts_long_pause() {
        let stop_signal = StopSignal::new();
        let mut sleeper = Sleeper::new(Duration::from_secs(60), stop_signal.clone());
        sleeper.start_frame();

        let stopper = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            stop_signal.stop();
        });

        let started = Instant::now();
        assert_eq!(sleeper.sleep(), Pause::Interrupted);
        assert!(started.elapsed() < Duration::from_secs(5));

        stopper.join().unwrap();
    }
}
