use std::time::Instant;

/// Ceiling on a single tick's delta. A host that stalls (window hidden,
/// machine asleep) resumes with one capped step instead of teleporting
/// every note past the target.
pub const MAX_DT: f32 = 0.1;

/// Wall-clock delta bookkeeping for the main loop. The simulation never
/// drives its own clock; this hands it measured seconds, one tick at a time.
pub struct Ticker {
    prev: Instant,
}

impl Ticker {
    pub fn new() -> Self {
        Self { prev: Instant::now() }
    }

    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.prev).as_secs_f32();
        self.prev = now;

        dt.min(MAX_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn dt_is_bounded() {
        let mut ticker = Ticker::new();

        let dt = ticker.tick();
        assert!(dt >= 0.0);
        assert!(dt <= MAX_DT);
    }

    #[test]
    fn stall_is_capped() {
        let mut ticker = Ticker::new();
        ticker.prev = Instant::now() - Duration::from_secs(5);

        assert_eq!(ticker.tick(), MAX_DT);
    }
}
