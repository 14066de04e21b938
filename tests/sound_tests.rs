// Host-side tests for ping placement, timing and burst plans.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod sound {
    include!("../src/core/sound.rs");
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use sound::*;
use std::time::Duration;

const TRIALS: usize = 2000;
const EPS: f32 = 1e-2;

// Recover (percent radius, degrees in [0, 360)) from an on-screen position.
fn to_polar(position: glam::Vec2) -> (f32, f32) {
    let d = position - RADAR_CENTER;
    let radius = d.length() / (RADAR_RADIUS_FRACTION * 100.0) * 100.0;
    let angle = d.y.atan2(d.x).to_degrees().rem_euclid(360.0);
    (radius, angle)
}

fn angle_in_range(range: &AngleRange, deg: f32) -> bool {
    // tolerate float error at the interval edges, including across 0/360
    [deg, deg - EPS, deg + EPS]
        .iter()
        .any(|d| range.contains(d.rem_euclid(360.0)) || range.contains(*d))
}

#[test]
fn from_key_maps_known_events_and_rejects_others() {
    for ev in SoundEvent::ALL {
        assert_eq!(SoundEvent::from_key(ev.key()), Some(ev));
    }
    assert_eq!(SoundEvent::from_key("unknown-type"), None);
    assert_eq!(SoundEvent::from_key(""), None);
    assert_eq!(SoundEvent::from_key("Gunshot"), None);
}

#[test]
fn placements_stay_within_configured_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    for ev in SoundEvent::ALL {
        let cfg = ev.config();
        for _ in 0..TRIALS {
            let p = cfg.place(&mut rng);
            assert!(cfg.radius.contains(p.radius), "{:?} radius {}", ev, p.radius);
            assert!(cfg.angle.contains(p.angle), "{:?} angle {}", ev, p.angle);

            // recover the polar pair from the on-screen position
            let (r, a) = to_polar(p.position);
            assert!(
                r >= cfg.radius.min - EPS && r <= cfg.radius.max + EPS,
                "{:?} implied radius {}",
                ev,
                r
            );
            assert!(angle_in_range(&cfg.angle, a), "{:?} implied angle {}", ev, a);
        }
    }
}

#[test]
fn positions_stay_inside_the_display_region() {
    let mut rng = StdRng::seed_from_u64(11);
    for ev in SoundEvent::ALL {
        for _ in 0..TRIALS {
            let pos = ev.config().place(&mut rng).position;
            assert!((0.0..=100.0).contains(&pos.x), "{:?} x {}", ev, pos.x);
            assert!((0.0..=100.0).contains(&pos.y), "{:?} y {}", ev, pos.y);
        }
    }
}

#[test]
fn wrapping_range_samples_only_the_wrapped_arc() {
    let range = AngleRange::new(300.0, 60.0);
    assert!(range.wraps());
    assert!((range.span() - 120.0).abs() < 1e-4);

    let mut rng = StdRng::seed_from_u64(42);
    let mut saw_high = false;
    let mut saw_low = false;
    for _ in 0..TRIALS {
        let a = range.sample(&mut rng);
        assert!((0.0..360.0).contains(&a), "angle {} out of [0, 360)", a);
        assert!(a >= 300.0 || a <= 60.0, "angle {} outside wrapped arc", a);
        saw_high |= a >= 300.0;
        saw_low |= a <= 60.0;
    }
    assert!(saw_high && saw_low, "both sides of 0 should be hit");
}

#[test]
fn angle_at_maps_unit_interval_across_the_wrap() {
    let range = AngleRange::new(300.0, 60.0);
    assert!((range.at(0.0) - 300.0).abs() < 1e-4);
    assert!((range.at(0.5) - 0.0).abs() < 1e-4);
    assert!((range.at(0.25) - 330.0).abs() < 1e-4);
    assert!((range.at(1.0) - 60.0).abs() < 1e-4);

    let plain = AngleRange::new(60.0, 120.0);
    assert!(!plain.wraps());
    assert!((plain.at(0.5) - 90.0).abs() < 1e-4);
}

#[test]
fn wrapping_contains_excludes_the_gap() {
    let range = AngleRange::new(300.0, 60.0);
    assert!(range.contains(0.0));
    assert!(range.contains(359.9));
    assert!(range.contains(60.0));
    assert!(!range.contains(61.0));
    assert!(!range.contains(180.0));
    assert!(!range.contains(299.0));
}

#[test]
fn to_cartesian_follows_screen_axes() {
    // 0 deg points right, 90 deg points down (y grows downward)
    let right = to_cartesian(100.0, 0.0);
    assert!((right.x - 100.0).abs() < 1e-3 && (right.y - 50.0).abs() < 1e-3);
    let down = to_cartesian(100.0, 90.0);
    assert!((down.x - 50.0).abs() < 1e-3 && (down.y - 100.0).abs() < 1e-3);
    let center = to_cartesian(0.0, 123.0);
    assert!((center.x - 50.0).abs() < 1e-6 && (center.y - 50.0).abs() < 1e-6);
    // radius percent maps onto the region's radius, not its diameter
    let half = to_cartesian(50.0, 180.0);
    assert!((half.x - 25.0).abs() < 1e-3);
}

#[test]
fn display_durations_per_event() {
    assert_eq!(SoundEvent::Explosion.display_duration(), Duration::from_millis(1500));
    assert_eq!(SoundEvent::Gunshot.display_duration(), Duration::from_millis(700));
    for ev in [SoundEvent::Footsteps, SoundEvent::Voice, SoundEvent::Reload] {
        assert_eq!(ev.display_duration(), Duration::from_millis(1300));
    }
}

#[test]
fn footsteps_burst_is_three_pings_170ms_apart() {
    let offsets = SoundEvent::Footsteps.burst_offsets();
    let ms: Vec<u128> = offsets.iter().map(|d| d.as_millis()).collect();
    assert_eq!(ms, vec![0, 170, 340]);
}

#[test]
fn reload_bursts_twice_and_others_fire_once() {
    let ms: Vec<u128> = SoundEvent::Reload
        .burst_offsets()
        .iter()
        .map(|d| d.as_millis())
        .collect();
    assert_eq!(ms, vec![0, 170]);
    for ev in [SoundEvent::Gunshot, SoundEvent::Explosion, SoundEvent::Voice] {
        let offsets = ev.burst_offsets();
        assert_eq!(offsets.len(), 1, "{:?}", ev);
        assert!(offsets[0].is_zero());
    }
}

#[test]
fn edge_flashes_only_for_directional_events() {
    assert_eq!(SoundEvent::Footsteps.config().edge, None);
    assert_eq!(SoundEvent::Reload.config().edge, None);
    let gun = SoundEvent::Gunshot.config().edge.expect("gunshot flashes");
    assert_eq!(gun.direction, EdgeDirection::Right);
    assert_eq!(gun.class, "edge-indicator--gunshot");
    let boom = SoundEvent::Explosion.config().edge.expect("explosion flashes");
    assert_eq!(boom.direction, EdgeDirection::Bottom);
    let voice = SoundEvent::Voice.config().edge.expect("voice flashes");
    assert_eq!(voice.direction, EdgeDirection::Left);
    assert_eq!(EDGE_FLASH_MS, 550);
}

#[test]
fn edge_directions_index_their_own_slot() {
    for (i, d) in EdgeDirection::ALL.iter().enumerate() {
        assert_eq!(d.index(), i);
        assert!(d.element_id().starts_with("edge-"));
    }
}
