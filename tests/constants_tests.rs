// Host-side tests for DOM constants and timing relationships.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod sound {
    include!("../src/core/sound.rs");
}

use constants::*;
use sound::*;

#[test]
fn trigger_selector_matches_event_attribute() {
    assert_eq!(TRIGGER_SELECTOR, format!("[{}]", EVENT_ATTR));
}

#[test]
fn visual_classes_extend_the_base_ping_class() {
    for ev in SoundEvent::ALL {
        let class = ev.config().visual_class;
        assert!(class.starts_with(&format!("{}--", PING_CLASS)), "{}", class);
        assert!(class.ends_with(ev.key()));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_have_logical_relationships() {
    assert!(GUNSHOT_PING_MS < DEFAULT_PING_MS);
    assert!(DEFAULT_PING_MS < EXPLOSION_PING_MS);
    // a burst's last ping appears before its first one is removed
    assert!(2 * BURST_STAGGER_MS < DEFAULT_PING_MS);
    assert!(EDGE_FLASH_MS < GUNSHOT_PING_MS);
}

#[test]
fn radius_ranges_fit_the_region() {
    for ev in SoundEvent::ALL {
        let r = ev.config().radius;
        assert!(r.min >= 0.0 && r.max <= 100.0 && r.min <= r.max, "{:?}", ev);
        let a = ev.config().angle;
        assert!((0.0..=360.0).contains(&a.start) && (0.0..=360.0).contains(&a.end));
        assert!(a.span() > 0.0 && a.span() <= 360.0);
    }
}
