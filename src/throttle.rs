use std::num::NonZeroU32;
use std::thread;

use governor::clock::{Clock, DefaultClock};
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

/// Token-bucket throttle shared by every outbound request in a run. The
/// upstream enforces a hard requests-per-minute ceiling; `acquire` blocks the
/// calling thread until the next permit instead of erroring.
pub struct RequestThrottle {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>,
    clock: DefaultClock,
}

impl RequestThrottle {
    pub fn per_minute(requests: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(requests).expect("request rate must be nonzero"));
        let clock = DefaultClock::default();
        RequestThrottle {
            limiter: RateLimiter::direct_with_clock(quota, &clock),
            clock,
        }
    }

    /// Blocks until a request permit is available.
    pub fn acquire(&self) {
        while let Err(not_until) = self.limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }
}
