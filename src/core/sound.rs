use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

// Ping and edge-flash timing
pub const EXPLOSION_PING_MS: u64 = 1500;
pub const GUNSHOT_PING_MS: u64 = 700;
pub const DEFAULT_PING_MS: u64 = 1300;
pub const EDGE_FLASH_MS: u64 = 550;
pub const BURST_STAGGER_MS: u64 = 170; // delay between sub-pings of a burst

// Radar geometry, in percent of the display region
pub const RADAR_CENTER: Vec2 = Vec2::new(50.0, 50.0);
pub const RADAR_RADIUS_FRACTION: f32 = 0.5; // region radius as a fraction of its size

/// Sound event kinds a trigger button can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Footsteps,
    Gunshot,
    Explosion,
    Voice,
    Reload,
}

impl SoundEvent {
    pub const ALL: [SoundEvent; 5] = [
        SoundEvent::Footsteps,
        SoundEvent::Gunshot,
        SoundEvent::Explosion,
        SoundEvent::Voice,
        SoundEvent::Reload,
    ];

    /// Map an external `data-event` value to a known event.
    #[inline]
    pub fn from_key(key: &str) -> Option<SoundEvent> {
        match key {
            "footsteps" => Some(SoundEvent::Footsteps),
            "gunshot" => Some(SoundEvent::Gunshot),
            "explosion" => Some(SoundEvent::Explosion),
            "voice" => Some(SoundEvent::Voice),
            "reload" => Some(SoundEvent::Reload),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SoundEvent::Footsteps => "footsteps",
            SoundEvent::Gunshot => "gunshot",
            SoundEvent::Explosion => "explosion",
            SoundEvent::Voice => "voice",
            SoundEvent::Reload => "reload",
        }
    }

    pub fn config(self) -> &'static SoundEventConfig {
        match self {
            SoundEvent::Footsteps => &FOOTSTEPS,
            SoundEvent::Gunshot => &GUNSHOT,
            SoundEvent::Explosion => &EXPLOSION,
            SoundEvent::Voice => &VOICE,
            SoundEvent::Reload => &RELOAD,
        }
    }

    /// How long a ping of this kind stays on the radar.
    pub fn display_duration(self) -> Duration {
        let ms = match self {
            SoundEvent::Explosion => EXPLOSION_PING_MS,
            SoundEvent::Gunshot => GUNSHOT_PING_MS,
            _ => DEFAULT_PING_MS,
        };
        Duration::from_millis(ms)
    }

    /// Start offsets of the pings spawned by a single trigger click.
    ///
    /// Footsteps and reloads come out as a short staggered burst; everything
    /// else is a single immediate ping.
    pub fn burst_offsets(self) -> SmallVec<[Duration; 4]> {
        let count = match self {
            SoundEvent::Footsteps => 3,
            SoundEvent::Reload => 2,
            _ => 1,
        };
        (0..count)
            .map(|i| Duration::from_millis(i * BURST_STAGGER_MS))
            .collect()
    }
}

/// Closed interval of distance from the radar center, in percent of its radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusRange {
    pub min: f32,
    pub max: f32,
}

impl RadiusRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn at(&self, t: f32) -> f32 {
        self.min + t * (self.max - self.min)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.at(rng.gen::<f32>())
    }

    #[inline]
    pub fn contains(&self, radius: f32) -> bool {
        radius >= self.min && radius <= self.max
    }
}

/// Closed interval of degrees. A `start` greater than `end` wraps through 360.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleRange {
    pub start: f32,
    pub end: f32,
}

impl AngleRange {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Width of the interval in degrees.
    #[inline]
    pub fn span(&self) -> f32 {
        if self.wraps() {
            (360.0 - self.start) + self.end
        } else {
            self.end - self.start
        }
    }

    /// Angle at fraction `t` (0..=1) of the way from `start` to `end`.
    pub fn at(&self, t: f32) -> f32 {
        let angle = self.start + t * self.span();
        if self.wraps() && angle >= 360.0 {
            angle - 360.0
        } else {
            angle
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.at(rng.gen::<f32>())
    }

    /// Membership in degrees, with `deg` taken modulo 360 for wrapping ranges.
    pub fn contains(&self, deg: f32) -> bool {
        if self.wraps() {
            let d = deg.rem_euclid(360.0);
            d >= self.start || d <= self.end
        } else {
            deg >= self.start && deg <= self.end
        }
    }
}

/// Directional indicator around the radar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    Top,
    Right,
    Bottom,
    Left,
}

impl EdgeDirection {
    pub const ALL: [EdgeDirection; 4] = [
        EdgeDirection::Top,
        EdgeDirection::Right,
        EdgeDirection::Bottom,
        EdgeDirection::Left,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            EdgeDirection::Top => "edge-top",
            EdgeDirection::Right => "edge-right",
            EdgeDirection::Bottom => "edge-bottom",
            EdgeDirection::Left => "edge-left",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeFlash {
    pub direction: EdgeDirection,
    pub class: &'static str,
}

/// Static placement and styling rules for one sound event kind.
///
/// Fields:
/// - `radius`: allowed distance from center (percent of radar radius)
/// - `angle`: allowed direction in degrees, 0 pointing right, growing clockwise on screen
/// - `visual_class`: CSS modifier class for the ping marker
/// - `edge`: optional indicator to flash alongside the ping
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundEventConfig {
    pub radius: RadiusRange,
    pub angle: AngleRange,
    pub visual_class: &'static str,
    pub edge: Option<EdgeFlash>,
}

const FOOTSTEPS: SoundEventConfig = SoundEventConfig {
    radius: RadiusRange::new(20.0, 50.0),
    angle: AngleRange::new(200.0, 340.0), // behind / flanks
    visual_class: "sound-ping--footsteps",
    edge: None,
};

const GUNSHOT: SoundEventConfig = SoundEventConfig {
    radius: RadiusRange::new(40.0, 80.0),
    angle: AngleRange::new(300.0, 60.0), // right side arc
    visual_class: "sound-ping--gunshot",
    edge: Some(EdgeFlash {
        direction: EdgeDirection::Right,
        class: "edge-indicator--gunshot",
    }),
};

const EXPLOSION: SoundEventConfig = SoundEventConfig {
    radius: RadiusRange::new(60.0, 90.0),
    angle: AngleRange::new(60.0, 120.0), // bottom arc
    visual_class: "sound-ping--explosion",
    edge: Some(EdgeFlash {
        direction: EdgeDirection::Bottom,
        class: "edge-indicator--explosion",
    }),
};

const VOICE: SoundEventConfig = SoundEventConfig {
    radius: RadiusRange::new(30.0, 70.0),
    angle: AngleRange::new(120.0, 240.0), // left arc
    visual_class: "sound-ping--voice",
    edge: Some(EdgeFlash {
        direction: EdgeDirection::Left,
        class: "edge-indicator--voice",
    }),
};

const RELOAD: SoundEventConfig = SoundEventConfig {
    radius: RadiusRange::new(15.0, 35.0),
    angle: AngleRange::new(0.0, 360.0),
    visual_class: "sound-ping--reload",
    edge: None,
};

/// Where a ping landed, in both polar and percent-cartesian form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PingPlacement {
    pub radius: f32,
    pub angle: f32,
    pub position: Vec2,
}

impl SoundEventConfig {
    pub fn place<R: Rng + ?Sized>(&self, rng: &mut R) -> PingPlacement {
        let radius = self.radius.sample(rng);
        let angle = self.angle.sample(rng);
        debug_assert!(self.angle.contains(angle));
        PingPlacement {
            radius,
            angle,
            position: to_cartesian(radius, angle),
        }
    }
}

/// Project a polar (percent radius, degrees) pair into percent coordinates of
/// the display region. y grows downward, so positive angles turn clockwise.
#[inline]
pub fn to_cartesian(radius_pct: f32, angle_deg: f32) -> Vec2 {
    let r = (radius_pct / 100.0) * RADAR_RADIUS_FRACTION * 100.0;
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    RADAR_CENTER + Vec2::new(cos, sin) * r
}
