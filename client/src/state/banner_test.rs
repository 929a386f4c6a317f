use super::*;

const TTL: f64 = 4000.0;

// =============================================================
// Idle / showing transitions
// =============================================================

#[test]
fn starts_idle() {
    let banner = Banner::<&str>::new(TTL);
    assert!(!banner.is_showing());
    assert_eq!(banner.ticket(), None);
}

#[test]
fn trigger_shows_payload_until_deadline() {
    let mut banner = Banner::new(TTL);
    let ticket = banner.trigger("saved", 1000.0);
    assert_eq!(ticket.deadline_ms, 5000.0);
    assert_eq!(banner.payload(), Some(&"saved"));

    assert!(!banner.tick(4999.0));
    assert!(banner.is_showing());
    assert!(banner.tick(5000.0));
    assert!(!banner.is_showing());
}

#[test]
fn retrigger_restarts_the_clock() {
    let mut banner = Banner::new(TTL);
    banner.trigger("first", 0.0);
    let second = banner.trigger("second", 3000.0);

    assert!(!banner.tick(4000.0));
    assert_eq!(banner.payload(), Some(&"second"));
    assert_eq!(second.deadline_ms, 7000.0);
    assert!(banner.tick(7000.0));
}

#[test]
fn sequence_numbers_increase_monotonically() {
    let mut banner = Banner::new(TTL);
    let a = banner.trigger(1, 0.0);
    let b = banner.trigger(2, 0.0);
    banner.dismiss();
    let c = banner.trigger(3, 0.0);
    assert!(a.seq < b.seq && b.seq < c.seq);
}

// =============================================================
// Keyed expiry
// =============================================================

#[test]
fn stale_expire_does_not_clear_newer_banner() {
    let mut banner = Banner::new(TTL);
    let first = banner.trigger("first", 0.0);
    let second = banner.trigger("second", 500.0);

    assert!(!banner.expire(first.seq));
    assert_eq!(banner.payload(), Some(&"second"));
    assert!(banner.expire(second.seq));
    assert!(!banner.is_showing());
}

#[test]
fn two_quick_triggers_leave_only_second_after_first_timeout() {
    let mut banner = Banner::new(TTL);
    let first = banner.trigger("joined", 0.0);
    banner.trigger("hosted", 200.0);

    // The first trigger's own timer fires at its deadline.
    banner.expire(first.seq);
    banner.tick(first.deadline_ms);

    let shown = banner.current().expect("second banner still visible");
    assert_eq!(shown.payload, "hosted");
    assert_eq!(shown.shown_at_ms, 200.0);
}

#[test]
fn expire_when_idle_is_a_no_op() {
    let mut banner = Banner::<u8>::new(TTL);
    assert!(!banner.expire(1));
}

// =============================================================
// BannerTicket
// =============================================================

#[test]
fn remaining_ms_rounds_up_and_floors_at_zero() {
    let ticket = BannerTicket { seq: 1, deadline_ms: 3000.0 };
    assert_eq!(ticket.remaining_ms(0.0), 3000);
    assert_eq!(ticket.remaining_ms(2999.5), 1);
    assert_eq!(ticket.remaining_ms(5000.0), 0);
}
