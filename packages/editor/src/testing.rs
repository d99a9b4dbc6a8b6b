//! Recording surface shared by the unit tests

use std::cell::RefCell;
use std::rc::Rc;

use crate::{EditingSurface, FormatCommand, ImageAttrs};

#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub content: String,
    pub editable: Option<bool>,
    pub rendered_height: f64,
    pub replaces: Vec<(String, bool)>,
    pub commands: Vec<FormatCommand>,
    pub images: Vec<(String, ImageAttrs)>,
}

/// Surface whose state stays inspectable after it is boxed into a session
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn with_content(content: &str) -> Self {
        let surface = Self::default();
        surface.log.borrow_mut().content = content.to_string();
        surface
    }

    /// Simulate the user typing
    pub fn type_content(&self, content: &str) {
        self.log.borrow_mut().content = content.to_string();
    }

    pub fn replace_count(&self) -> usize {
        self.log.borrow().replaces.len()
    }
}

impl EditingSurface for RecordingSurface {
    fn content(&self) -> String {
        self.log.borrow().content.clone()
    }

    fn set_content(&mut self, content: &str, suppress_change_event: bool) {
        let mut log = self.log.borrow_mut();
        log.content = content.to_string();
        log.replaces.push((content.to_string(), suppress_change_event));
    }

    fn set_editable(&mut self, editable: bool) {
        self.log.borrow_mut().editable = Some(editable);
    }

    fn rendered_height(&self) -> f64 {
        self.log.borrow().rendered_height
    }

    fn apply_format(&mut self, command: &FormatCommand) {
        self.log.borrow_mut().commands.push(command.clone());
    }

    fn set_image_attrs(&mut self, image_id: &str, attrs: &ImageAttrs) {
        self.log
            .borrow_mut()
            .images
            .push((image_id.to_string(), attrs.clone()));
    }
}
