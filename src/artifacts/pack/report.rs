use crate::artifacts::pack::catalog::PackSpec;
use crate::artifacts::pack::manifest::{IconEntry, PackManifest};
use crate::artifacts::status::status_name::StatusName;
use std::collections::BTreeMap;

/// Outcome of one status within a pack run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconOutcome {
    Created(IconEntry),
    MissingMarkup,
    ConversionFailed(String),
}

#[derive(Debug, Clone)]
pub struct PackReport {
    spec: PackSpec,
    outcomes: BTreeMap<StatusName, IconOutcome>,
}

impl PackReport {
    pub fn new(spec: PackSpec) -> Self {
        Self {
            spec,
            outcomes: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, status: StatusName, outcome: IconOutcome) {
        self.outcomes.insert(status, outcome);
    }

    pub fn spec(&self) -> &PackSpec {
        &self.spec
    }

    pub fn created_count(&self) -> usize {
        self.outcomes
            .values()
            .filter(|outcome| matches!(outcome, IconOutcome::Created(_)))
            .count()
    }

    pub fn failed(&self) -> impl Iterator<Item = (&StatusName, &IconOutcome)> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !matches!(outcome, IconOutcome::Created(_)))
    }

    /// A pack only counts once every status produced an icon.
    pub fn is_complete(&self) -> bool {
        StatusName::all().all(|status| {
            matches!(self.outcomes.get(&status), Some(IconOutcome::Created(_)))
        })
    }

    pub fn manifest(&self) -> PackManifest {
        let icons = self
            .outcomes
            .iter()
            .filter_map(|(status, outcome)| match outcome {
                IconOutcome::Created(entry) => Some((*status, entry.clone())),
                _ => None,
            })
            .collect();

        PackManifest::new(self.spec.name.to_string(), self.spec.display_name.to_string(), icons)
    }
}
