//! One playable key unit: key, lever, pivot, hammer, damper and wire.

use crate::constants::*;
use crate::error::PianoError;
use crate::geometry::{Cuboid, Cylinder, Primitive, Shape, Tetrahedron, EMPTY_SHAPE};
use glam::Vec4;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyType {
    Natural,
    Sharp,
}

impl KeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Natural => "natural",
            KeyType::Sharp => "sharp",
        }
    }

    pub fn color(&self) -> Vec4 {
        match self {
            KeyType::Natural => NATURAL_KEY_COLOR,
            KeyType::Sharp => SHARP_KEY_COLOR,
        }
    }

    /// Keyboard pattern used by the scene: even rows natural, odd rows sharp.
    pub fn for_row(row: usize) -> Self {
        if row % 2 == 0 {
            KeyType::Natural
        } else {
            KeyType::Sharp
        }
    }
}

impl FromStr for KeyType {
    type Err = PianoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" => Ok(KeyType::Natural),
            "sharp" => Ok(KeyType::Sharp),
            other => Err(PianoError::UnknownKeyType(other.to_string())),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The eight sub-shapes, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    Key = 0,
    Lever = 1,
    Pivot = 2,
    HammerArm = 3,
    Hammer = 4,
    DamperArm = 5,
    Damper = 6,
    Wire = 7,
}

impl Part {
    pub const ALL: [Part; PARTS_PER_ASSEMBLY] = [
        Part::Key,
        Part::Lever,
        Part::Pivot,
        Part::HammerArm,
        Part::Hammer,
        Part::DamperArm,
        Part::Damper,
        Part::Wire,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Part> {
        Part::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Part::Key => "key",
            Part::Lever => "lever",
            Part::Pivot => "pivot",
            Part::HammerArm => "hammerarm",
            Part::Hammer => "hammer",
            Part::DamperArm => "damperarm",
            Part::Damper => "damper",
            Part::Wire => "wire",
        }
    }

    /// Fixed dimensions of each part; only the key's color depends on the key type.
    pub fn primitive(self) -> Primitive {
        match self {
            Part::Key => Cuboid::new(1.2, 0.2, 0.2).into(),
            Part::Lever => Cuboid::new(3.8, 0.05, 0.05).into(),
            Part::Pivot => Tetrahedron::new(0.15, 0.65, 0.15).into(),
            Part::HammerArm => Cuboid::new(0.08, 1.6, 0.03).into(),
            Part::Hammer => Cuboid::new(0.6, 0.2, 0.15).into(),
            Part::DamperArm => Cuboid::new(0.08, 2.1, 0.03).into(),
            Part::Damper => Cuboid::new(0.6, 0.2, 0.15).into(),
            Part::Wire => Cylinder::new(0.05, 5.0).into(),
        }
    }

    pub fn color(self, key_type: KeyType) -> Vec4 {
        match self {
            Part::Key => key_type.color(),
            Part::Lever => LEVER_COLOR,
            Part::Pivot => PIVOT_COLOR,
            Part::HammerArm | Part::Hammer => HAMMER_COLOR,
            Part::DamperArm | Part::Damper => DAMPER_COLOR,
            Part::Wire => WIRE_COLOR,
        }
    }
}

impl FromStr for Part {
    type Err = PianoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Part::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| PianoError::UnknownPart(s.to_string()))
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully generated assembly. Geometry is built once here and never changes.
#[derive(Clone, Debug)]
pub struct Piano {
    key_type: KeyType,
    shapes: [Shape; PARTS_PER_ASSEMBLY],
}

impl Piano {
    pub fn new(key_type: KeyType) -> Self {
        let shapes = Part::ALL.map(|part| part.primitive().shape(part.color(key_type)));
        Self { key_type, shapes }
    }

    pub fn from_tag(tag: &str) -> Result<Self, PianoError> {
        Ok(Self::new(tag.parse()?))
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn part(&self, part: Part) -> &Shape {
        &self.shapes[part.index()]
    }

    /// Sub-shape by index, or the empty shape outside 0..8.
    pub fn get_by_index(&self, index: usize) -> &Shape {
        self.shapes.get(index).unwrap_or(&EMPTY_SHAPE)
    }

    pub fn index_of(&self, name: &str) -> Result<usize, PianoError> {
        name.parse::<Part>().map(Part::index)
    }

    pub fn name_of(&self, index: usize) -> Option<&'static str> {
        Part::from_index(index).map(Part::name)
    }

    pub fn parts(&self) -> impl Iterator<Item = (Part, &Shape)> {
        Part::ALL.into_iter().zip(self.shapes.iter())
    }
}
