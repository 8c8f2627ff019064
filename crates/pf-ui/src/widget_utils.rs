//! Widget id helpers
//!
//! Every slide is drawn through the same renderers, so scroll areas, grids and
//! text fields need ids that include the slide they live on. Without that egui
//! reports "multiple widgets with same ID" in debug builds and shares scroll
//! offsets between slides.

use egui::{Grid, Id, ScrollArea};
use std::fmt::Display;

/// Widget ID builder that ensures unique IDs by combining multiple components
#[derive(Debug, Clone)]
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Root id for everything on one slide
    pub fn slide(index: usize) -> Self {
        Self::new("slide").index(index)
    }

    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Add an index to the ID (useful in loops)
    pub fn index(self, idx: usize) -> Self {
        self.with(format!("idx_{}", idx))
    }

    pub fn build(&self) -> String {
        self.components.join("_")
    }

    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}

/// Extension trait for ScrollArea to easily add unique IDs
pub trait ScrollAreaExt {
    fn id_builder(self, builder: &WidgetId) -> Self;
}

impl ScrollAreaExt for ScrollArea {
    fn id_builder(self, builder: &WidgetId) -> Self {
        self.id_source(builder.build())
    }
}

/// Extension trait for Grid to easily add unique IDs
pub trait GridExt {
    fn new_with_id(builder: &WidgetId) -> Self;
}

impl GridExt for Grid {
    fn new_with_id(builder: &WidgetId) -> Self {
        Grid::new(builder.build())
    }
}

/// Id for one field of a form, e.g. `contact_form_email`
pub fn field_id(form: impl Display, field: impl Display) -> String {
    format!("{}_{}", form, field)
}
