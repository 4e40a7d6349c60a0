use crate::areas::converter::Converter;
use crate::areas::workspace::PackWorkspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Shared state for the icon commands: where packs live, how SVGs become
/// icons, and where progress lines go.
pub struct Studio {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: PackWorkspace,
    converter: Box<dyn Converter>,
}

impl Studio {
    pub fn new(
        output_dir: &Path,
        converter: Box<dyn Converter>,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        Studio {
            writer: RefCell::new(writer),
            workspace: PackWorkspace::new(output_dir.into()),
            converter,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &PackWorkspace {
        &self.workspace
    }

    pub fn converter(&self) -> &dyn Converter {
        self.converter.as_ref()
    }
}
