use rand::seq::SliceRandom;
use rand::Rng;
use std::time::SystemTime;

/// How many pieces one burst spawns
pub const PIECE_COUNT: usize = 100;

/// Number of colors a piece can take; the renderer owns the mapping
pub const COLOR_COUNT: usize = 6;

const GRAVITY: f64 = 12.0;

/// One piece of confetti falling from the top of the terminal
#[derive(Debug, Clone)]
pub struct ConfettiPiece {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub delay: f64,
    pub age: f64,
    pub max_age: f64,
    pub symbol: char,
    pub color_index: usize,
}

impl ConfettiPiece {
    fn new(x: f64, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y: -1.0,
            vel_x: rng.gen_range(-1.5..1.5),
            vel_y: rng.gen_range(2.0..5.0),
            delay: rng.gen_range(0.0..2.0),
            age: 0.0,
            max_age: rng.gen_range(2.0..4.0),
            symbol: *['▀', '▄', '█', '▌', '▐', '■'].choose(rng).unwrap_or(&'■'),
            color_index: rng.gen_range(0..COLOR_COUNT),
        }
    }

    /// Advance by dt seconds. Returns false once the piece has expired.
    /// Pieces sit invisible above the screen until their delay runs out,
    /// then fall under gravity with a little sideways drift.
    fn update(&mut self, dt: f64) -> bool {
        if self.delay > 0.0 {
            self.delay -= dt;
            return true;
        }

        self.x += self.vel_x * dt;
        self.y += self.vel_y * dt;
        self.vel_y += GRAVITY * dt;

        self.age += dt;
        self.age < self.max_age
    }

    /// Whether the piece has started falling (and should be drawn)
    pub fn is_falling(&self) -> bool {
        self.delay <= 0.0
    }
}

/// One-shot confetti burst, driven by the app tick
#[derive(Debug)]
pub struct ConfettiAnimation {
    pub pieces: Vec<ConfettiPiece>,
    pub start_time: SystemTime,
    pub duration: f64,
    pub is_active: bool,
    pub terminal_width: f64,
    pub terminal_height: f64,
}

impl ConfettiAnimation {
    pub fn new() -> Self {
        Self {
            pieces: Vec::new(),
            start_time: SystemTime::now(),
            duration: 5.0,
            is_active: false,
            terminal_width: 80.0,
            terminal_height: 24.0,
        }
    }

    /// Spawn a fresh burst across the top edge of the terminal
    pub fn start(&mut self, width: u16, height: u16) {
        let mut rng = rand::thread_rng();

        self.pieces.clear();
        self.start_time = SystemTime::now();
        self.is_active = true;
        self.terminal_width = width as f64;
        self.terminal_height = height as f64;

        for _ in 0..PIECE_COUNT {
            let x = rng.gen_range(0.0..width.max(1) as f64);
            self.pieces.push(ConfettiPiece::new(x, &mut rng));
        }
    }

    pub fn update(&mut self) {
        if !self.is_active {
            return;
        }

        let elapsed = self.start_time.elapsed().unwrap_or_default().as_secs_f64();
        if elapsed >= self.duration {
            self.is_active = false;
            self.pieces.clear();
            return;
        }

        // One app tick worth of simulated time
        let dt = 0.1;
        let width = self.terminal_width;
        let height = self.terminal_height;
        self.pieces.retain_mut(|piece| {
            let still_alive = piece.update(dt);

            // Sweep pieces that have drifted off the sides or fallen past
            // the bottom; the buffer lets them exit smoothly
            let buffer = 3.0;
            let off_screen = piece.y > height + buffer
                || piece.x < -buffer
                || piece.x > width + buffer;

            still_alive && !off_screen
        });
    }
}

impl Default for ConfettiAnimation {
    fn default() -> Self {
        Self::new()
    }
}
