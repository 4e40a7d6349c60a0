use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use overlay_icons::areas::converter::{ConverterKind, build_converter};
use overlay_icons::areas::samples::SampleLibrary;
use overlay_icons::areas::studio::Studio;
use overlay_icons::artifacts::icon::opacity::Opacity;
use overlay_icons::artifacts::pack::catalog::{PACKS, PackSpec, find_pack};
use overlay_icons::commands::transparent::{DEFAULT_PACK, TransparencyTarget};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "overlay-icons",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Build and tune version-control overlay icon packs",
    long_about = "Generates multi-resolution ICO overlay icons for a file-manager shell extension \
    from themed HTML samples, regenerates the hand-tuned packs, \
    and fades existing icons to a given opacity.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "OVERLAY_ICONS_OUTPUT_DIR",
        default_value = "resources/icon-packs",
        help = "Root directory holding one directory per icon pack"
    )]
    output_dir: PathBuf,
    #[arg(
        long,
        global = true,
        value_enum,
        env = "OVERLAY_ICONS_CONVERTER",
        default_value = "magick",
        help = "How SVG sources are turned into ICO files"
    )]
    converter: ConverterKind,
    #[arg(
        long,
        global = true,
        env = "MAGICK_BIN",
        default_value = "magick",
        help = "ImageMagick executable used by the magick converter"
    )]
    magick_bin: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "make-transparent",
        about = "Scale the alpha channel of overlay icons in place",
        long_about = "This command multiplies the alpha of every pixel of every frame by the opacity. \
        Without file arguments it processes the status icons of one pack."
    )]
    MakeTransparent {
        #[arg(index = 1, help = "Icon files to adjust")]
        files: Vec<PathBuf>,
        #[arg(long, conflicts_with_all = ["files", "all"], help = "Pack whose status icons are adjusted")]
        pack: Option<String>,
        #[arg(long, conflicts_with = "files", help = "Adjust every icon below the output directory")]
        all: bool,
        #[arg(long, default_value = "128", help = "Opacity level out of 255, or a percentage like 50%")]
        opacity: Opacity,
    },
    #[command(
        name = "extract-packs",
        about = "Build icon packs from the HTML samples",
        long_about = "This command extracts the gradient and glyph of every status from each sample page \
        and converts them into one ICO per status."
    )]
    ExtractPacks {
        #[arg(
            long,
            env = "OVERLAY_ICONS_SAMPLES_DIR",
            default_value = "git-status-samples",
            help = "Directory holding the sample pages"
        )]
        samples_dir: PathBuf,
        #[arg(long = "pack", help = "Only process the named pack (repeatable)")]
        packs: Vec<String>,
    },
    #[command(
        name = "fix-packs",
        about = "Regenerate the Neon City and Fire & Ice packs",
        long_about = "This command rebuilds the packs whose samples need hand-authored colors and glyphs. \
        Any conversion failure stops the run."
    )]
    FixPacks,
}

fn init_tracing() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn selected_packs(names: &[String]) -> Result<Vec<PackSpec>> {
    if names.is_empty() {
        return Ok(PACKS.to_vec());
    }

    names.iter().map(|name| find_pack(name).copied()).collect()
}

fn main() -> Result<()> {
    init_tracing()?;

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();
    let converter = build_converter(cli.converter, &cli.magick_bin);
    let studio = Studio::new(&cli.output_dir, converter, Box::new(std::io::stdout()));

    match &cli.command {
        Commands::MakeTransparent {
            files,
            pack,
            all,
            opacity,
        } => {
            let target = if !files.is_empty() {
                TransparencyTarget::Files(files.clone())
            } else if *all {
                TransparencyTarget::AllPacks
            } else {
                TransparencyTarget::Pack(pack.clone().unwrap_or_else(|| DEFAULT_PACK.to_string()))
            };

            studio.make_transparent(&target, *opacity)?;
        }
        Commands::ExtractPacks { samples_dir, packs } => {
            let samples = SampleLibrary::new(samples_dir.clone().into_boxed_path());
            let packs = selected_packs(packs)?;

            studio.extract_packs(&samples, &packs)?;
        }
        Commands::FixPacks => studio.fix_packs()?,
    }

    Ok(())
}
