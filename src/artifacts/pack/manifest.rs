use crate::artifacts::pack::gradient::Gradient;
use crate::artifacts::status::status_name::StatusName;
use derive_new::new;
use serde::Serialize;
use std::collections::BTreeMap;

pub const MANIFEST_FILE_NAME: &str = "pack.json";
pub const CATALOG_FILE_NAME: &str = "icon-packs.json";
pub const CATALOG_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    svg: String,
    ico: String,
    gradient: Gradient,
}

impl IconEntry {
    pub fn new(status: StatusName, gradient: Gradient) -> Self {
        Self {
            svg: status.svg_file_name(),
            ico: status.icon_file_name(),
            gradient,
        }
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }
}

/// `pack.json`: what a pack directory holds after an extraction run.
#[derive(Debug, Clone, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct PackManifest {
    name: String,
    display_name: String,
    icons: BTreeMap<StatusName, IconEntry>,
}

impl PackManifest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icons(&self) -> &BTreeMap<StatusName, IconEntry> {
        &self.icons
    }
}

/// `icon-packs.json`: every pack touched by the run.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogIndex {
    version: &'static str,
    packs: Vec<PackManifest>,
}

impl CatalogIndex {
    pub fn new(packs: Vec<PackManifest>) -> Self {
        Self {
            version: CATALOG_VERSION,
            packs,
        }
    }
}
