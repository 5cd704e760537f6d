use crossterm::style::Color;
use rand::Rng;

/// Glyphs the confetti is cut from: loose letters plus a few shapes
const CONFETTI: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ*+•◆";

const PARTICLE_COUNT: usize = 80;

/// A single confetti particle
#[derive(Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub char: char,
    pub color: Color,
    pub lifetime: f32,
}

impl Particle {
    pub fn is_visible(&self, width: u16, height: u16) -> bool {
        (0.0..width as f32).contains(&self.x)
            && (0.0..height as f32).contains(&self.y)
            && self.lifetime > 0.0
    }
}

/// Fully saturated color at `hue` turns around the wheel (wraps outside 0..1)
pub fn rainbow(hue: f32) -> Color {
    let channel = |offset: f32| {
        let k = (hue.rem_euclid(1.0) * 6.0 + offset) % 6.0;
        let level = 1.0 - (k.min(4.0 - k).clamp(0.0, 1.0));
        (level * 255.0).round() as u8
    };
    Color::Rgb {
        r: channel(5.0),
        g: channel(3.0),
        b: channel(1.0),
    }
}

/// Falling confetti shown over the board when the last word is found
#[derive(Default)]
pub struct Celebration {
    particles: Vec<Particle>,
    frame: u32,
    width: u16,
    height: u16,
}

impl Celebration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh burst sized to the terminal
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.frame = 0;
        self.particles = (0..PARTICLE_COUNT).map(|_| self.spawn(true)).collect();
    }

    fn spawn(&self, anywhere: bool) -> Particle {
        let mut rng = rand::thread_rng();
        let y = if anywhere {
            rng.gen_range(0.0..self.height as f32)
        } else {
            0.0
        };
        Particle {
            x: rng.gen_range(0.0..self.width as f32),
            y,
            vx: rng.gen_range(-0.4..0.4),
            vy: rng.gen_range(0.2..0.8),
            char: CONFETTI.chars().nth(rng.gen_range(0..CONFETTI.chars().count())).unwrap_or('*'),
            color: rainbow(rng.gen_range(0.0..1.0)),
            lifetime: rng.gen_range(40.0..120.0),
        }
    }

    /// Advance one frame; particles that fall off are replaced at the top
    pub fn update(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];
            p.x += p.vx;
            p.y += p.vy;
            p.vy = (p.vy + 0.02).min(1.2);
            p.lifetime -= 1.0;
            if !p.is_visible(self.width, self.height) {
                self.particles[i] = self.spawn(false);
            }
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Particles currently on screen
    pub fn visible(&self) -> impl Iterator<Item = &Particle> {
        let (w, h) = (self.width, self.height);
        self.particles.iter().filter(move |p| p.is_visible(w, h))
    }

    /// Rainbow color for the banner, cycling with the frame count
    pub fn banner_color(&self, offset: usize) -> Color {
        rainbow(self.frame as f32 * 0.02 + offset as f32 * 0.07)
    }
}
