//! Surface that records operations instead of rasterizing them

use super::{Path, Surface};
use crate::shapes::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Fill(Path, Color),
    Stroke(Path, Color),
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn strokes(&self) -> impl Iterator<Item = (&Path, Color)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Stroke(path, color) => Some((path, *color)),
            Op::Fill(..) => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Path, Color)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Fill(path, color) => Some((path, *color)),
            Op::Stroke(..) => None,
        })
    }
}

impl Surface for Recorder {
    fn fill(&mut self, path: &Path, color: Color) {
        self.ops.push(Op::Fill(path.clone(), color));
    }

    fn stroke(&mut self, path: &Path, color: Color) {
        self.ops.push(Op::Stroke(path.clone(), color));
    }
}
