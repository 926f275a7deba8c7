/// Horizontal offsets, in cells, that make up one wiggle cycle
const WIGGLE_STEPS: [i16; 8] = [0, 1, 2, 1, 0, -1, -2, -1];

/// Frames each offset is held for
const FRAMES_PER_STEP: u64 = 2;

/// Shake animation applied to the text while the pad is annoyed.
#[derive(Debug, Clone, Default)]
pub struct Wiggle {
    frame: u64,
    is_active: bool,
}

impl Wiggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Turn the animation on or off. Switching off rewinds it.
    pub fn set_active(&mut self, active: bool) {
        if !active {
            self.frame = 0;
        }
        self.is_active = active;
    }

    /// Advance by one display frame
    pub fn update(&mut self) {
        if self.is_active {
            self.frame = self.frame.wrapping_add(1);
        }
    }

    pub fn offset(&self) -> i16 {
        if !self.is_active {
            return 0;
        }
        let step = (self.frame / FRAMES_PER_STEP) as usize % WIGGLE_STEPS.len();
        WIGGLE_STEPS[step]
    }
}
