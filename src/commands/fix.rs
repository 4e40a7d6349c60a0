use crate::areas::converter::convert_svg_to_ico;
use crate::areas::studio::Studio;
use crate::artifacts::pack::catalog::{FIXED_PACKS, FixedPack, find_pack};
use crate::artifacts::pack::glyph::Glyph;
use crate::artifacts::status::status_name::StatusName;
use crate::artifacts::svg::IconSvg;
use crate::commands::{Marker, rule};
use anyhow::Context;
use std::io::Write;

impl Studio {
    /// Regenerates the hand-tuned packs. The first failure aborts the run.
    pub fn fix_packs(&self) -> anyhow::Result<()> {
        let display_names = FIXED_PACKS
            .iter()
            .map(|pack| find_pack(pack.name).map(|spec| spec.display_name))
            .collect::<anyhow::Result<Vec<_>>>()?;

        writeln!(
            self.writer(),
            "Fixing {} icon packs",
            display_names.join(" and ")
        )?;
        writeln!(self.writer(), "{}", rule())?;

        for pack in &FIXED_PACKS {
            self.regenerate_pack(pack)?;
        }

        writeln!(self.writer(), "\n{}", rule())?;
        writeln!(self.writer(), "{} Fixed both icon packs!", Marker::Ok)?;

        Ok(())
    }

    fn regenerate_pack(&self, pack: &FixedPack) -> anyhow::Result<()> {
        writeln!(self.writer(), "\nRegenerating: {}", pack.name)?;

        let pack_dir = self.workspace().create_pack_dir(pack.name)?;
        for status in StatusName::all() {
            let gradient = pack.gradient(status)?;
            let glyph = Glyph::builtin(status)?;

            let svg = IconSvg::new(&gradient, &glyph).write(&pack_dir, status.as_str())?;
            convert_svg_to_ico(self.converter(), &svg)
                .with_context(|| format!("failed to convert {status} in {}", pack.name))?;

            writeln!(self.writer(), "  {} {}", Marker::Ok, status.icon_file_name())?;
        }

        Ok(())
    }
}
