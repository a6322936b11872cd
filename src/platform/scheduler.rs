//! Run-to-completion scheduler for the two clock drivers
//!
//! Deadlines are measured as elapsed time since start. The host polls, runs
//! every returned trigger to completion in order, then sleeps until the next
//! deadline, so a time encode and a physics step never overlap.

use std::time::Duration;

/// Work due at a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Read the wall clock and update the encoding
    SecondTick,
    /// Sample the accelerometer and advance physics
    PhysicsStep,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    second_period: Duration,
    physics_period: Duration,
    next_second: Duration,
    /// `None` once physics is stopped
    next_physics: Option<Duration>,
}

impl Scheduler {
    /// Second tick fires immediately, the first physics step one period later
    pub fn new(physics_period: Duration) -> Self {
        debug_assert!(!physics_period.is_zero());
        Self {
            second_period: Duration::from_secs(1),
            physics_period,
            next_second: Duration::ZERO,
            next_physics: Some(physics_period),
        }
    }

    /// Triggers due at `now`, second tick first.
    ///
    /// Missed second ticks collapse into one. The physics timer re-arms one
    /// period after `now`, as if the step ran instantly.
    pub fn poll(&mut self, now: Duration) -> Vec<Trigger> {
        let mut due = Vec::with_capacity(2);

        if now >= self.next_second {
            due.push(Trigger::SecondTick);
            let behind = (now - self.next_second).as_nanos() / self.second_period.as_nanos();
            if behind > 0 {
                log::debug!("skipped {behind} second ticks");
            }
            let periods = u32::try_from(behind + 1).unwrap_or(u32::MAX);
            self.next_second += self.second_period * periods;
        }

        if self.next_physics.is_some_and(|next| now >= next) {
            due.push(Trigger::PhysicsStep);
            self.next_physics = Some(now + self.physics_period);
        }

        due
    }

    /// Time left until the earliest deadline
    pub fn until_next(&self, now: Duration) -> Duration {
        let next = match self.next_physics {
            Some(physics) => physics.min(self.next_second),
            None => self.next_second,
        };
        next.saturating_sub(now)
    }

    /// Disarm the physics timer. Cube state is left as last written.
    pub fn stop_physics(&mut self) {
        self.next_physics = None;
    }

    pub fn resume_physics(&mut self, now: Duration) {
        self.next_physics = Some(now + self.physics_period);
    }

    pub fn physics_running(&self) -> bool {
        self.next_physics.is_some()
    }

    pub fn physics_period(&self) -> Duration {
        self.physics_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_first_poll_fires_second_tick() {
        let mut sched = Scheduler::new(ms(50));
        assert_eq!(sched.poll(ms(0)), vec![Trigger::SecondTick]);
        assert!(sched.poll(ms(10)).is_empty());
        assert_eq!(sched.until_next(ms(10)), ms(40));
    }

    #[test]
    fn test_physics_every_period() {
        let mut sched = Scheduler::new(ms(50));
        sched.poll(ms(0));

        let steps = (1..=20)
            .map(|i| sched.poll(ms(i * 50)))
            .filter(|due| due.contains(&Trigger::PhysicsStep))
            .count();
        assert_eq!(steps, 20);
    }

    #[test]
    fn test_second_tick_comes_first() {
        let mut sched = Scheduler::new(ms(50));
        sched.poll(ms(0));
        for i in 1..20 {
            sched.poll(ms(i * 50));
        }
        assert_eq!(
            sched.poll(ms(1000)),
            vec![Trigger::SecondTick, Trigger::PhysicsStep]
        );
    }

    #[test]
    fn test_late_poll_skips_missed_seconds() {
        let mut sched = Scheduler::new(ms(50));
        sched.poll(ms(0));

        let due = sched.poll(ms(3500));
        assert_eq!(due, vec![Trigger::SecondTick, Trigger::PhysicsStep]);
        // Next second tick realigned to 4s, next step 50ms after the late poll
        assert_eq!(sched.until_next(ms(3500)), ms(50));
        assert!(!sched.poll(ms(3550)).contains(&Trigger::SecondTick));
        assert_eq!(sched.poll(ms(4000))[0], Trigger::SecondTick);
    }

    #[test]
    fn test_stop_and_resume_physics() {
        let mut sched = Scheduler::new(ms(50));
        sched.poll(ms(0));
        sched.stop_physics();
        assert!(!sched.physics_running());
        assert!(sched.poll(ms(500)).is_empty());
        assert_eq!(sched.until_next(ms(500)), ms(500));

        sched.resume_physics(ms(500));
        assert_eq!(sched.poll(ms(550)), vec![Trigger::PhysicsStep]);
    }
}
