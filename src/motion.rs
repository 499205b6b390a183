/// Hammer stroke phase of one assembly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Idle,
    Rising,
    Falling,
}

/// Motion phase plus the position counter, which stays within `[0, limit]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HammerState {
    pub motion: Motion,
    pub position: u32,
}

impl HammerState {
    pub fn is_active(&self) -> bool {
        self.motion != Motion::Idle
    }

    /// Start a stroke. Returns false if one is already under way.
    pub fn trigger(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.motion = Motion::Rising;
        true
    }

    /// Advance one tick, settling into the next phase at either end of the
    /// stroke. Returns the new phase when it changed.
    pub fn advance(&mut self, limit: u32) -> Option<Motion> {
        match self.motion {
            Motion::Idle => None,
            Motion::Rising => {
                self.position = (self.position + 1).min(limit);
                (self.position >= limit).then(|| {
                    self.motion = Motion::Falling;
                    Motion::Falling
                })
            }
            Motion::Falling => {
                self.position = self.position.saturating_sub(1);
                (self.position == 0).then(|| {
                    self.motion = Motion::Idle;
                    Motion::Idle
                })
            }
        }
    }

    /// Fraction of the stroke covered, 0 at rest and 1 at the wire.
    pub fn travel(&self, limit: u32) -> f32 {
        if limit == 0 {
            return 0.0;
        }
        self.position as f32 / limit as f32
    }
}
