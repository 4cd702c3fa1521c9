use web_time::Duration;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Cooperative seconds counter driven by frame deltas.
#[derive(Debug, Default, Clone)]
pub struct PuzzleTimer {
    running: bool,
    /// Time accumulated toward the next whole second.
    carry: Duration,
}
impl PuzzleTimer {
    /// Starts or resumes the timer.
    pub fn start(&mut self) {
        self.running = true;
    }
    /// Pauses the timer without discarding the partial second.
    pub fn stop(&mut self) {
        self.running = false;
    }
    /// Discards the partial second. Does not change whether the timer is
    /// running.
    pub fn reset(&mut self) {
        self.carry = Duration::ZERO;
    }
    /// Returns whether the timer is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the timer and returns the number of whole seconds that
    /// elapsed.
    pub fn proceed(&mut self, delta: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.carry += delta;
        let mut ticks = 0;
        while self.carry >= ONE_SECOND {
            self.carry -= ONE_SECOND;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_counts_whole_seconds() {
        let mut timer = PuzzleTimer::default();
        assert_eq!(timer.proceed(Duration::from_secs(5)), 0);

        timer.start();
        assert_eq!(timer.proceed(Duration::from_millis(600)), 0);
        assert_eq!(timer.proceed(Duration::from_millis(600)), 1);
        assert_eq!(timer.proceed(Duration::from_millis(2800)), 3);

        timer.stop();
        assert_eq!(timer.proceed(Duration::from_secs(1)), 0);
        timer.start();
        timer.reset();
        assert_eq!(timer.proceed(Duration::from_millis(900)), 0);
    }
}
