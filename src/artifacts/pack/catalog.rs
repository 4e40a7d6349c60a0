use crate::artifacts::pack::gradient::Gradient;
use crate::artifacts::status::status_name::StatusName;

/// One themed sample page and the pack it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackSpec {
    pub file: &'static str,
    pub name: &'static str,
    pub display_name: &'static str,
}

pub const PACKS: [PackSpec; 9] = [
    PackSpec {
        file: "sample-1-aztec-bold.html",
        name: "aztec-bold",
        display_name: "Aztec Bold",
    },
    PackSpec {
        file: "sample-2-coral-reef.html",
        name: "coral-reef",
        display_name: "Coral Reef",
    },
    PackSpec {
        file: "sample-3-neon-city.html",
        name: "neon-city",
        display_name: "Neon City",
    },
    PackSpec {
        file: "sample-4-desert-sun.html",
        name: "desert-sun",
        display_name: "Desert Sun",
    },
    PackSpec {
        file: "sample-5-tropical-paradise.html",
        name: "tropical-paradise",
        display_name: "Tropical Paradise",
    },
    PackSpec {
        file: "sample-6-electric-plasma.html",
        name: "electric-plasma",
        display_name: "Electric Plasma",
    },
    PackSpec {
        file: "sample-7-sunset-vibes.html",
        name: "sunset-vibes",
        display_name: "Sunset Vibes",
    },
    PackSpec {
        file: "sample-8-candy-pop.html",
        name: "candy-pop",
        display_name: "Candy Pop",
    },
    PackSpec {
        file: "sample-10-fire-ice.html",
        name: "fire-ice",
        display_name: "Fire & Ice",
    },
];

/// Solid neon fills: both stops carry the same color.
pub const NEON_CITY: phf::Map<&'static str, (&'static str, &'static str)> = phf::phf_map! {
    "added" => ("#00FFFF", "#00FFFF"),
    "clean" => ("#39FF14", "#39FF14"),
    "conflicted" => ("#FF073A", "#FF073A"),
    "ignored" => ("#9D00FF", "#9D00FF"),
    "modified" => ("#FF6600", "#FF6600"),
    "untracked" => ("#FFD700", "#FFD700"),
};

/// Hot and cold two-tone gradients.
pub const FIRE_ICE: phf::Map<&'static str, (&'static str, &'static str)> = phf::phf_map! {
    "added" => ("#00FFFF", "#00BFFF"),
    "clean" => ("#7FFFD4", "#40E0D0"),
    "conflicted" => ("#FF6347", "#FF4500"),
    "ignored" => ("#BA55D3", "#8A2BE2"),
    "modified" => ("#FF8C00", "#FFA500"),
    "untracked" => ("#87CEFA", "#4682B4"),
};

/// Packs whose sample markup is regenerated from hand-authored tables.
pub const FIXED_PACKS: [FixedPack; 2] = [
    FixedPack {
        name: "neon-city",
        palette: &NEON_CITY,
    },
    FixedPack {
        name: "fire-ice",
        palette: &FIRE_ICE,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct FixedPack {
    pub name: &'static str,
    palette: &'static phf::Map<&'static str, (&'static str, &'static str)>,
}

impl FixedPack {
    pub fn gradient(&self, status: StatusName) -> anyhow::Result<Gradient> {
        let (start, end) = self
            .palette
            .get(status.as_str())
            .ok_or_else(|| anyhow::anyhow!("pack {} has no colors for {status}", self.name))?;

        Gradient::try_from_pair(start, end)
    }
}

pub fn find_pack(name: &str) -> anyhow::Result<&'static PackSpec> {
    PACKS
        .iter()
        .find(|pack| pack.name == name)
        .ok_or_else(|| anyhow::anyhow!("unknown icon pack: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pack_names_are_unique() {
        let mut names = PACKS.iter().map(|p| p.name).collect::<Vec<_>>();
        names.sort();
        names.dedup();

        assert_eq!(names.len(), PACKS.len());
    }

    #[test]
    fn find_pack_by_name() {
        let pack = find_pack("fire-ice").unwrap();

        assert_eq!(pack.file, "sample-10-fire-ice.html");
        assert_eq!(pack.display_name, "Fire & Ice");
        assert!(find_pack("aurora").is_err());
    }

    #[test]
    fn neon_city_palette_is_solid() {
        let pack = FIXED_PACKS[0];

        for status in StatusName::all() {
            assert!(pack.gradient(status).unwrap().is_solid(), "{status}");
        }
    }

    #[test]
    fn fire_ice_palette_is_two_tone() {
        let pack = FIXED_PACKS[1];

        for status in StatusName::all() {
            assert!(!pack.gradient(status).unwrap().is_solid(), "{status}");
        }
        assert_eq!(
            pack.gradient(StatusName::Modified).unwrap(),
            Gradient::try_from_pair("#FF8C00", "#FFA500").unwrap()
        );
    }

    #[test]
    fn fixed_packs_are_in_the_catalog() {
        for fixed in FIXED_PACKS {
            assert!(find_pack(fixed.name).is_ok());
        }
    }
}
