//! Depth-parallax starfield.
//!
//! Particles fly toward the viewer: every frame their depth shrinks, and once
//! it reaches zero the particle is respawned in place at the back of the
//! field. The pool is allocated once; frames never allocate particles.

pub const MAX_DEPTH: f64 = 1000.0;

/// Focal length of the projection. A particle at this depth is drawn at 1:1.
const FOCAL: f64 = 256.0;
const MAX_RADIUS: f64 = 2.5;
const TRAIL_ALPHA: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Where this particle was drawn last frame; `None` right after a respawn.
    pub prev: Option<(f64, f64)>,
}

impl Particle {
    fn spawn(rng: &mut impl FnMut() -> f64, spread: f64, z: f64) -> Self {
        Self {
            x: (rng() * 2.0 - 1.0) * spread,
            y: (rng() * 2.0 - 1.0) * spread,
            z,
            prev: None,
        }
    }

    /// 0.0 at the back of the field, 1.0 at the viewer.
    pub fn nearness(&self) -> f64 {
        (1.0 - self.z / MAX_DEPTH).clamp(0.0, 1.0)
    }
}

/// One particle's draw instruction for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
    pub trail: Option<Trail>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trail {
    pub from_x: f64,
    pub from_y: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSettings {
    pub count: usize,
    pub speed: f64,
    pub spread: f64,
    pub pointer_damping: f64,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            count: 160,
            speed: 4.0,
            spread: 1000.0,
            pointer_damping: 0.05,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    settings: FieldSettings,
    width: f64,
    height: f64,
    /// Pointer offset from the canvas center, eased toward `pointer_target`.
    pointer: (f64, f64),
    pointer_target: (f64, f64),
}

impl ParticleField {
    pub fn new(settings: FieldSettings, mut rng: impl FnMut() -> f64) -> Self {
        let particles = (0..settings.count)
            .map(|_| {
                // (0, MAX_DEPTH]: a depth of exactly zero would divide by zero
                let z = MAX_DEPTH - rng() * (MAX_DEPTH - 1.0);
                Particle::spawn(&mut rng, settings.spread, z)
            })
            .collect();
        Self {
            particles,
            settings,
            width: 0.0,
            height: 0.0,
            pointer: (0.0, 0.0),
            pointer_target: (0.0, 0.0),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        // old trail anchors were projected against the previous center
        for p in &mut self.particles {
            p.prev = None;
        }
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Pointer position in canvas pixels.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer_target = (x - self.width / 2.0, y - self.height / 2.0);
    }

    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    /// Advances one frame and returns what to draw.
    pub fn step(&mut self, rng: &mut impl FnMut() -> f64) -> Vec<Sprite> {
        let k = self.settings.pointer_damping;
        self.pointer.0 += (self.pointer_target.0 - self.pointer.0) * k;
        self.pointer.1 += (self.pointer_target.1 - self.pointer.1) * k;

        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        let (mx, my) = self.pointer;
        let speed = self.settings.speed;
        let spread = self.settings.spread;

        let mut sprites = Vec::with_capacity(self.particles.len());
        for p in &mut self.particles {
            p.z -= speed;
            if p.z <= 0.0 {
                *p = Particle::spawn(rng, spread, MAX_DEPTH);
            }

            let scale = p.z / FOCAL;
            let sx = cx + (p.x - mx) / scale;
            let sy = cy + (p.y - my) / scale;
            let near = p.nearness();

            sprites.push(Sprite {
                x: sx,
                y: sy,
                radius: near * MAX_RADIUS,
                alpha: near,
                trail: p.prev.map(|(fx, fy)| Trail {
                    from_x: fx,
                    from_y: fy,
                    alpha: near * TRAIL_ALPHA,
                }),
            });
            p.prev = Some((sx, sy));
        }
        sprites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for `Math.random`.
    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    fn field(count: usize, speed: f64) -> ParticleField {
        let settings = FieldSettings { count, speed, ..FieldSettings::default() };
        let mut f = ParticleField::new(settings, lcg(7));
        f.resize(800.0, 600.0);
        f
    }

    #[test]
    fn pool_is_allocated_once_with_requested_size() {
        let mut f = field(128, 4.0);
        let mut rng = lcg(1);
        let before = f.particles().as_ptr();
        for _ in 0..500 {
            assert_eq!(f.step(&mut rng).len(), 128);
        }
        assert_eq!(f.particles().len(), 128);
        assert_eq!(f.particles().as_ptr(), before);
    }

    #[test]
    fn depth_stays_in_range_every_frame() {
        let mut f = field(200, 7.5);
        assert!(f.particles().iter().all(|p| p.z > 0.0 && p.z <= MAX_DEPTH));
        let mut rng = lcg(99);
        for _ in 0..2000 {
            f.step(&mut rng);
            for p in f.particles() {
                assert!((0.0..=MAX_DEPTH).contains(&p.z), "depth out of range: {}", p.z);
            }
        }
    }

    #[test]
    fn respawn_clears_trail_anchor() {
        let settings = FieldSettings { count: 1, speed: 10.0, ..FieldSettings::default() };
        let mut f = ParticleField::new(settings, || 0.5);
        f.resize(100.0, 100.0);
        let mut rng = || 0.5;

        let first = f.step(&mut rng);
        assert!(first[0].trail.is_none());
        let second = f.step(&mut rng);
        assert!(second[0].trail.is_some());

        // run until the particle wraps to the back
        let mut saw_respawn = false;
        for _ in 0..200 {
            let s = f.step(&mut rng);
            if f.particles()[0].z == MAX_DEPTH {
                assert!(s[0].trail.is_none());
                saw_respawn = true;
                break;
            }
        }
        assert!(saw_respawn);
    }

    #[test]
    fn resize_drops_every_trail_anchor() {
        let mut f = field(64, 2.0);
        let mut rng = lcg(11);
        f.step(&mut rng);
        assert!(f.step(&mut rng).iter().any(|s| s.trail.is_some()));

        f.resize(1024.0, 768.0);
        assert!(f.particles().iter().all(|p| p.prev.is_none()));
        let after = f.step(&mut rng);
        assert!(after.iter().all(|s| s.trail.is_none()));
        assert_eq!(f.size(), (1024.0, 768.0));
    }

    #[test]
    fn nearer_particles_are_bigger_and_brighter() {
        let far = Particle { x: 0.0, y: 0.0, z: 900.0, prev: None };
        let near = Particle { x: 0.0, y: 0.0, z: 100.0, prev: None };
        assert!(near.nearness() > far.nearness());
        assert_eq!(Particle { z: MAX_DEPTH, ..far }.nearness(), 0.0);
    }

    #[test]
    fn particle_on_axis_projects_to_center_without_pointer() {
        let settings = FieldSettings { count: 1, ..FieldSettings::default() };
        // rng 0.5 puts x and y at exactly 0
        let mut f = ParticleField::new(settings, || 0.5);
        f.resize(400.0, 300.0);
        let s = f.step(&mut || 0.5);
        assert_eq!((s[0].x, s[0].y), (200.0, 150.0));
    }

    #[test]
    fn pointer_is_damped_toward_target() {
        let mut f = field(1, 1.0);
        f.set_pointer(800.0, 600.0);
        let mut rng = lcg(3);
        f.step(&mut rng);
        let (px, py) = f.pointer();
        assert!(px > 0.0 && px < 400.0);
        assert!(py > 0.0 && py < 300.0);
        for _ in 0..500 {
            f.step(&mut rng);
        }
        let (px, py) = f.pointer();
        assert!((px - 400.0).abs() < 1e-3);
        assert!((py - 300.0).abs() < 1e-3);
    }
}
