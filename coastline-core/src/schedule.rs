use std::time::Duration;

/// A host timer that can fire a callback repeatedly.
///
/// The callback itself is bound by the host when the timer is created; this
/// trait only controls whether it is currently firing.
pub trait Timer {
    fn arm(&mut self, period: Duration);
    fn disarm(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Idle,
    Running,
    /// Permanently stopped; `start` and `reset` are ignored.
    Cancelled,
}

/// A cancellable repeating task over a host [`Timer`].
///
/// Carousels use `reset` when the visitor navigates manually (the auto-advance
/// clock starts over) and `cancel` when they must never advance again.
#[derive(Debug)]
pub struct RepeatingTask<T: Timer> {
    timer: T,
    period: Duration,
    state: TaskState,
}

impl<T: Timer> RepeatingTask<T> {
    pub fn new(timer: T, period: Duration) -> Self {
        Self {
            timer,
            period,
            state: TaskState::Idle,
        }
    }

    pub fn start(&mut self) {
        if self.state != TaskState::Idle {
            return;
        }
        self.timer.arm(self.period);
        self.state = TaskState::Running;
    }

    pub fn stop(&mut self) {
        if self.state == TaskState::Running {
            self.timer.disarm();
            self.state = TaskState::Idle;
        }
    }

    /// Stop and start again so the next tick is a full period away.
    pub fn reset(&mut self) {
        self.stop();
        self.start();
    }

    pub fn cancel(&mut self) {
        self.stop();
        self.state = TaskState::Cancelled;
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}

/// A timer with no clock of its own: the owner delivers ticks by hand.
/// Native hosts and tests use it to drive widgets deterministically.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManualTimer {
    period: Option<Duration>,
    arm_count: usize,
    disarm_count: usize,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The period the timer is armed with, if it is armed.
    pub fn armed(&self) -> Option<Duration> {
        self.period
    }

    pub fn arm_count(&self) -> usize {
        self.arm_count
    }

    pub fn disarm_count(&self) -> usize {
        self.disarm_count
    }
}

impl Timer for ManualTimer {
    fn arm(&mut self, period: Duration) {
        self.period = Some(period);
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.period = None;
        self.disarm_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> RepeatingTask<ManualTimer> {
        RepeatingTask::new(ManualTimer::new(), Duration::from_millis(3000))
    }

    #[test]
    fn test_start_arms_once() {
        let mut task = task();
        task.start();
        task.start();

        assert_eq!(task.state(), TaskState::Running);
        assert_eq!(task.timer().armed(), Some(Duration::from_millis(3000)));
        assert_eq!(task.timer().arm_count(), 1);
    }

    #[test]
    fn test_reset_rearms() {
        let mut task = task();
        task.start();
        task.reset();
        task.reset();

        assert_eq!(task.state(), TaskState::Running);
        assert_eq!(task.timer().arm_count(), 3);
        assert_eq!(task.timer().disarm_count(), 2);
    }

    #[test]
    fn test_stop_then_start() {
        let mut task = task();
        task.start();
        task.stop();
        assert_eq!(task.state(), TaskState::Idle);
        assert_eq!(task.timer().armed(), None);

        task.start();
        assert_eq!(task.state(), TaskState::Running);
    }

    #[test]
    fn test_cancel_is_permanent() {
        let mut task = task();
        task.start();
        task.cancel();
        task.start();
        task.reset();

        assert_eq!(task.state(), TaskState::Cancelled);
        assert_eq!(task.timer().armed(), None);
        assert_eq!(task.timer().arm_count(), 1);
    }

    #[test]
    fn test_cancel_before_start() {
        let mut task = task();
        task.cancel();
        task.start();
        assert_eq!(task.timer().arm_count(), 0);
        assert_eq!(task.timer().disarm_count(), 0);
    }
}
