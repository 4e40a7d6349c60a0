use anyhow::Context;
use serde::Serialize;

pub const HEX_COLOR_REGEX: &str = r"#[0-9A-Fa-f]{6}";
const DEFAULT_START: &str = "#888888";
const DEFAULT_END: &str = "#666666";

/// A `#RRGGBB` color, kept in the letter case it was written with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn try_parse(color: &str) -> anyhow::Result<Self> {
        let re = regex::Regex::new(&format!("^{HEX_COLOR_REGEX}$"))
            .with_context(|| format!("invalid hex color regex: {HEX_COLOR_REGEX}"))?;

        if re.is_match(color) {
            Ok(Self(color.to_string()))
        } else {
            anyhow::bail!("invalid hex color: {}", color)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two-stop fill of the circular icon background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gradient {
    start: HexColor,
    end: HexColor,
}

impl Gradient {
    pub fn new(start: HexColor, end: HexColor) -> Self {
        Self { start, end }
    }

    pub fn try_from_pair(start: &str, end: &str) -> anyhow::Result<Self> {
        Ok(Self::new(HexColor::try_parse(start)?, HexColor::try_parse(end)?))
    }

    pub fn solid(color: HexColor) -> Self {
        Self::new(color.clone(), color)
    }

    pub fn start(&self) -> &HexColor {
        &self.start
    }

    pub fn end(&self) -> &HexColor {
        &self.end
    }

    pub fn is_solid(&self) -> bool {
        self.start == self.end
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(
            HexColor(DEFAULT_START.to_string()),
            HexColor(DEFAULT_END.to_string()),
        )
    }
}
