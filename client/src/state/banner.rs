//! Transient banner state machine (XP pop-ups, notifications).
//!
//! DESIGN
//! ======
//! A banner is either idle or showing one payload. Triggering while showing
//! replaces the payload and restarts the clock; there is no queue. Each
//! trigger gets a fresh, monotonically increasing sequence number, and
//! `expire` only clears the banner when its sequence still matches, so a late
//! timer from an older trigger can never hide a newer message.
//!
//! Time is passed in explicitly (`now_ms`). In the browser a scheduled task
//! calls `expire`; tests call `tick` with simulated timestamps.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

/// Payload currently on screen plus when it went up.
#[derive(Clone, Debug, PartialEq)]
pub struct Shown<T> {
    pub seq: u64,
    pub payload: T,
    pub shown_at_ms: f64,
}

/// Handle for scheduling the clear of one specific trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BannerTicket {
    pub seq: u64,
    pub deadline_ms: f64,
}

impl BannerTicket {
    /// Milliseconds left before the deadline, rounded up for timer APIs.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn remaining_ms(&self, now_ms: f64) -> u32 {
        (self.deadline_ms - now_ms).max(0.0).ceil().min(f64::from(u32::MAX)) as u32
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Banner<T> {
    ttl_ms: f64,
    last_seq: u64,
    current: Option<Shown<T>>,
}

impl<T> Banner<T> {
    pub fn new(ttl_ms: f64) -> Self {
        Self { ttl_ms, last_seq: 0, current: None }
    }

    pub fn is_showing(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Shown<T>> {
        self.current.as_ref()
    }

    pub fn payload(&self) -> Option<&T> {
        self.current.as_ref().map(|shown| &shown.payload)
    }

    /// Ticket for the banner currently showing, if any.
    pub fn ticket(&self) -> Option<BannerTicket> {
        self.current
            .as_ref()
            .map(|shown| BannerTicket { seq: shown.seq, deadline_ms: shown.shown_at_ms + self.ttl_ms })
    }

    /// Show `payload` now, superseding whatever was showing.
    pub fn trigger(&mut self, payload: T, now_ms: f64) -> BannerTicket {
        self.last_seq += 1;
        self.current = Some(Shown { seq: self.last_seq, payload, shown_at_ms: now_ms });
        BannerTicket { seq: self.last_seq, deadline_ms: now_ms + self.ttl_ms }
    }

    /// Clear the banner if trigger `seq` is still the one showing.
    pub fn expire(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|shown| shown.seq == seq) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Clear the banner if its deadline has passed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.ticket() {
            Some(ticket) if now_ms >= ticket.deadline_ms => self.expire(ticket.seq),
            _ => false,
        }
    }

    /// Return to idle without touching the sequence counter.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
