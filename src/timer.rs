use std::time::Instant;

/// Wall-clock millisecond counter the game derives its delta time from.
pub struct Timer {
    started_at: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    pub fn peek_milliseconds(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn freshly_started_timer_reads_near_zero() {
        let timer = Timer::start();
        assert!(timer.peek_milliseconds() < 100);
    }

    #[test]
    fn peek_is_monotonic() {
        let timer = Timer::start();
        let first = timer.peek_milliseconds();
        sleep(Duration::from_millis(15));
        let second = timer.peek_milliseconds();
        assert!(second >= first + 10);
    }
}
