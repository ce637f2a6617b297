use std::ops::Deref;

use crate::common::metadata::Color;

// Module
//------------------------------------------------------------------------------

/// Cell state, tagged with the layer that drew it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Version(Color),
    Format(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Version(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

// Module matrix
//------------------------------------------------------------------------------

/// Square row-major grid. Negative indices count back from the far edge.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ModuleMatrix {
    grid: Vec<Module>,
    w: usize,
}

impl ModuleMatrix {
    pub fn new(w: usize) -> Self {
        Self { grid: vec![Module::Empty; w * w], w }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn modules(&self) -> &[Module] {
        &self.grid
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "Row {r} out of bounds for width {w}");
        debug_assert!(-w <= c && c < w, "Column {c} out of bounds for width {w}");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }
}
