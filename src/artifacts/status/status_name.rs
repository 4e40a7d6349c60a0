use serde::Serialize;

/// HTML class used by the sample markup for each status, in processing order.
///
/// The samples label untracked files with the `tracked` class.
pub const STATUS_CLASSES: phf::OrderedMap<&'static str, StatusName> = phf::phf_ordered_map! {
    "added" => StatusName::Added,
    "clean" => StatusName::Clean,
    "conflicted" => StatusName::Conflicted,
    "ignored" => StatusName::Ignored,
    "modified" => StatusName::Modified,
    "tracked" => StatusName::Untracked,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusName {
    Added,
    Clean,
    Conflicted,
    Ignored,
    Modified,
    Untracked,
}

impl StatusName {
    pub const ALL: [StatusName; 6] = [
        StatusName::Added,
        StatusName::Clean,
        StatusName::Conflicted,
        StatusName::Ignored,
        StatusName::Modified,
        StatusName::Untracked,
    ];

    pub fn all() -> impl Iterator<Item = StatusName> {
        Self::ALL.into_iter()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusName::Added => "added",
            StatusName::Clean => "clean",
            StatusName::Conflicted => "conflicted",
            StatusName::Ignored => "ignored",
            StatusName::Modified => "modified",
            StatusName::Untracked => "untracked",
        }
    }

    pub fn html_class(&self) -> &'static str {
        STATUS_CLASSES
            .entries()
            .find(|(_, status)| *status == self)
            .map(|(class, _)| *class)
            .unwrap_or(self.as_str())
    }

    pub fn from_html_class(class: &str) -> Option<Self> {
        STATUS_CLASSES.get(class).copied()
    }

    pub fn icon_file_name(&self) -> String {
        format!("{}.ico", self.as_str())
    }

    pub fn svg_file_name(&self) -> String {
        format!("{}.svg", self.as_str())
    }
}

impl std::str::FromStr for StatusName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown status name: {s}"))
    }
}

impl std::fmt::Display for StatusName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
