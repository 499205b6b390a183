//! Scene controller: the assemblies, their hammer strokes and the view.
//!
//! The frontend calls [`Scene::frame`] once per display refresh to obtain the
//! matrices for every part, then [`Scene::update`] to advance one tick.

use crate::constants::*;
use crate::error::SpeedError;
use crate::motion::{HammerState, Motion};
use crate::piano::{KeyType, Part, Piano};
use crate::placement::{self, Placement};
use crate::state::{ObjectSpin, ViewState};
use glam::{Mat3, Mat4};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneParams {
    pub assemblies: usize,
    /// Ticks for a full hammer rise.
    pub limit: u32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            assemblies: ASSEMBLY_COUNT,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// One assembly and everything that varies about it.
#[derive(Clone, Debug)]
pub struct AssemblySlot {
    pub piano: Piano,
    pub placement: Placement,
    pub hammer: HammerState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedChange {
    /// Lengthen the stroke by one step.
    Slower,
    /// Shorten the stroke by one step.
    Faster,
}

/// Matrices for one part in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartTransform {
    pub assembly: usize,
    pub part: Part,
    pub model: Mat4,
    pub normal_matrix: Mat3,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct Frame {
    pub view: Mat4,
    pub projection: Mat4,
    /// Assembly-major, part-index-minor.
    pub parts: Vec<PartTransform>,
}

pub struct Scene {
    slots: Vec<AssemblySlot>,
    limit: u32,
    active: usize,
    pub view: ViewState,
    pub spin: ObjectSpin,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneParams::default())
    }
}

impl Scene {
    pub fn new(params: SceneParams) -> Self {
        let limit = params.limit.clamp(MIN_LIMIT, MAX_LIMIT);
        if limit != params.limit {
            log::warn!(
                "[scene] hammer limit {} outside {MIN_LIMIT}..={MAX_LIMIT}, using {limit}",
                params.limit
            );
        }
        let slots = (0..params.assemblies)
            .map(|row| {
                let piano = Piano::new(KeyType::for_row(row));
                let placement = Placement::new(&piano, row);
                AssemblySlot {
                    piano,
                    placement,
                    hammer: HammerState::default(),
                }
            })
            .collect::<Vec<_>>();
        log::info!("[scene] assemblies={} limit={limit}", slots.len());
        Self {
            slots,
            limit,
            active: 0,
            view: ViewState::default(),
            spin: ObjectSpin::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn assemblies(&self) -> &[AssemblySlot] {
        &self.slots
    }

    pub fn assembly(&self, index: usize) -> Option<&AssemblySlot> {
        self.slots.get(index)
    }

    pub fn hammer(&self, index: usize) -> Option<HammerState> {
        self.slots.get(index).map(|s| s.hammer)
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of assemblies not at rest.
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Start the stroke of assembly `index`. No-op if it is already moving or
    /// does not exist.
    pub fn move_hammer(&mut self, index: usize) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            log::debug!("[scene] no assembly {index}");
            return false;
        };
        if !slot.hammer.trigger() {
            return false;
        }
        self.active += 1;
        log::info!("[scene] strike {index} ({})", slot.piano.key_type());
        true
    }

    pub fn adjust_speed(&mut self, change: SpeedChange) -> Result<u32, SpeedError> {
        if self.active > 0 {
            return Err(SpeedError::KeysMoving {
                active: self.active,
            });
        }
        self.limit = match change {
            SpeedChange::Slower if self.limit < MAX_LIMIT => self.limit + LIMIT_STEP,
            SpeedChange::Slower => return Err(SpeedError::Slowest),
            SpeedChange::Faster if self.limit > MIN_LIMIT => self.limit - LIMIT_STEP,
            SpeedChange::Faster => return Err(SpeedError::Fastest),
        };
        Ok(self.limit)
    }

    pub fn slow_down(&mut self) -> Result<u32, SpeedError> {
        self.adjust_speed(SpeedChange::Slower)
    }

    pub fn speed_up(&mut self) -> Result<u32, SpeedError> {
        self.adjust_speed(SpeedChange::Faster)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.view.resize(width, height);
    }

    /// Advance one tick: object spin, then every stroke.
    pub fn update(&mut self) {
        self.spin.step();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            match slot.hammer.advance(self.limit) {
                Some(Motion::Idle) => {
                    self.active = self.active.saturating_sub(1);
                    log::debug!("[scene] {i} at rest");
                }
                Some(m) => log::debug!("[scene] {i} -> {m:?}"),
                None => {}
            }
        }
    }

    /// Model transform of one part, including the object rotation.
    pub fn part_transform(&self, index: usize, part: Part) -> Option<Mat4> {
        let slot = self.slots.get(index)?;
        Some(
            self.spin.matrix()
                * slot
                    .placement
                    .transform(&slot.piano, part, &slot.hammer, self.limit),
        )
    }

    /// Current wire jitter of assembly `index`.
    pub fn wire_jitter(&self, index: usize) -> Option<f32> {
        self.slots.get(index).map(|s| placement::wire_jitter(&s.hammer))
    }

    pub fn frame(&self) -> Frame {
        let view = self.view.view_matrix();
        let spin = self.spin.matrix();
        let mut parts = Vec::with_capacity(self.slots.len() * PARTS_PER_ASSEMBLY);
        for (assembly, slot) in self.slots.iter().enumerate() {
            for part in Part::ALL {
                let model = spin
                    * slot
                        .placement
                        .transform(&slot.piano, part, &slot.hammer, self.limit);
                parts.push(PartTransform {
                    assembly,
                    part,
                    model,
                    normal_matrix: normal_matrix(view * model),
                });
            }
        }
        Frame {
            view,
            projection: self.view.projection_matrix(),
            parts,
        }
    }
}

/// Inverse-transpose of the upper 3x3 of `model_view`.
pub fn normal_matrix(model_view: Mat4) -> Mat3 {
    Mat3::from_mat4(model_view).inverse().transpose()
}
