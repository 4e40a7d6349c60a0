use std::str::FromStr;

const FULL: u16 = u8::MAX as u16;

/// Alpha multiplier expressed as a level out of 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Opacity(u8);

impl Opacity {
    pub const HALF: Opacity = Opacity(128);

    pub fn new(level: u8) -> Self {
        Self(level)
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    pub fn percent(&self) -> u16 {
        (self.0 as u16 * 100 + FULL / 2) / FULL
    }

    /// `floor(alpha * level / 255)`.
    pub fn scale(&self, alpha: u8) -> u8 {
        (alpha as u16 * self.0 as u16 / FULL) as u8
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::HALF
    }
}

impl FromStr for Opacity {
    type Err = anyhow::Error;

    /// Accepts a level (`128`) or a percentage (`50%`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s.strip_suffix('%') {
            Some(percent) => {
                let percent: u16 = percent
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid opacity percentage: {s}"))?;
                if percent > 100 {
                    anyhow::bail!("opacity percentage must be at most 100%, got {s}");
                }
                Ok(Self(((percent * FULL + 50) / 100) as u8))
            }
            None => s
                .parse::<u8>()
                .map(Self)
                .map_err(|_| anyhow::anyhow!("opacity level must be between 0 and 255, got {s}")),
        }
    }
}

impl std::fmt::Display for Opacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/255", self.0)
    }
}
