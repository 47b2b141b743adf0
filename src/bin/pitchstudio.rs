use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::{RngExt as _, SeedableRng as _};
use tracing_subscriber::EnvFilter;

use pitchstudio::{
    CancellationToken, FigureRenderer, FrameCompositor, Gender, HairStyle, MusicStyle,
    PlayerAttributes, Position, RecentGallery, Resolution, Rgba8, StudioConfig, TeamName, Theme,
    Transition, UploadedImages, VideoSettings,
};

#[derive(Parser, Debug)]
#[command(name = "pitchstudio", version)]
struct Cli {
    /// JSON config file (font path, surface sizes, gallery capacity).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw a player figure and write it as a PNG.
    Player(PlayerArgs),
    /// Composite images into a themed frame sequence and write the summary PNG.
    Video(VideoArgs),
}

#[derive(Parser, Debug)]
struct PlayerArgs {
    /// Randomize every attribute not given explicitly.
    #[arg(long)]
    random: bool,

    /// Seed for `--random`.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    #[arg(long)]
    gender: Option<Gender>,

    /// Skin tone as `#RRGGBB`.
    #[arg(long)]
    skin: Option<Rgba8>,

    #[arg(long)]
    hair: Option<HairStyle>,

    /// Hair color as `#RRGGBB`.
    #[arg(long)]
    hair_color: Option<Rgba8>,

    /// Jersey color as `#RRGGBB`.
    #[arg(long)]
    jersey: Option<Rgba8>,

    /// Team label; uppercased and cut to 10 characters.
    #[arg(long)]
    team: Option<String>,

    #[arg(long)]
    position: Option<Position>,

    /// Shirt number; clamped to 1..=99.
    #[arg(long, allow_negative_numbers = true)]
    number: Option<i64>,

    /// Number of figures to generate; more than one writes the recent gallery.
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct VideoArgs {
    /// Source images, in sequence order.
    #[arg(required = true)]
    images: Vec<PathBuf>,

    #[arg(long, default_value_t = Theme::Dynamic)]
    theme: Theme,

    #[arg(long, default_value_t = Transition::Fade)]
    transition: Transition,

    /// Seconds per image; clamped to 1..=10.
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    duration: i64,

    #[arg(long, default_value_t = Resolution::Uhd4k)]
    resolution: Resolution,

    #[arg(long, default_value_t = MusicStyle::Energetic)]
    music: MusicStyle,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Player(args) => cmd_player(&config, args),
        Command::Video(args) => cmd_video(&config, args).await,
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<StudioConfig> {
    let base = match path {
        Some(p) => StudioConfig::from_json_file(p)?,
        None => StudioConfig::default(),
    };
    Ok(base.with_env_overrides().validate()?)
}

fn player_attributes(args: &PlayerArgs, rng: &mut rand::rngs::StdRng) -> PlayerAttributes {
    let base = if args.random {
        PlayerAttributes::randomize(rng)
    } else {
        PlayerAttributes::default()
    };
    let mut attrs = PlayerAttributes {
        gender: args.gender.unwrap_or(base.gender),
        skin_tone: args.skin.unwrap_or(base.skin_tone),
        hair_style: args.hair.unwrap_or(base.hair_style),
        hair_color: args.hair_color.unwrap_or(base.hair_color),
        jersey_color: args.jersey.unwrap_or(base.jersey_color),
        team_name: args.team.as_deref().map(TeamName::new).unwrap_or(base.team_name),
        position: args.position.unwrap_or(base.position),
        shirt_number: base.shirt_number,
    };
    if let Some(n) = args.number {
        attrs = attrs.with_shirt_number(n);
    }
    attrs
}

fn cmd_player(config: &StudioConfig, args: PlayerArgs) -> anyhow::Result<()> {
    let mut renderer = FigureRenderer::from_config(config)?;
    let mut gallery = RecentGallery::with_capacity(config.gallery_capacity);
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    for _ in 0..args.count.max(1) {
        let attrs = player_attributes(&args, &mut rng);
        gallery.push(renderer.generate(&attrs)?);
    }
    create_dir(&args.out_dir)?;

    if args.count <= 1 {
        if let Some(latest) = gallery.get(0) {
            write_file(&args.out_dir.join(&latest.file_name), &latest.png)?;
        }
        return Ok(());
    }
    for (idx, image) in gallery.iter().enumerate() {
        if let Some(name) = gallery.thumbnail_file_name(idx) {
            write_file(&args.out_dir.join(name), &image.png)?;
        }
    }
    Ok(())
}

async fn cmd_video(config: &StudioConfig, args: VideoArgs) -> anyhow::Result<()> {
    let settings = VideoSettings {
        theme: args.theme,
        transition: args.transition,
        resolution: args.resolution,
        music: args.music,
        ..VideoSettings::default()
    }
    .with_duration(args.duration);

    let mut uploads = UploadedImages::new();
    uploads.extend_from_files(&args.images).await?;
    eprintln!(
        "{} images, estimated duration {}s",
        uploads.len(),
        settings.estimated_duration_secs(uploads.len())
    );

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, cancelling");
            on_signal.cancel();
        }
    });

    let mut compositor = FrameCompositor::from_config(config)?;
    let summary = compositor
        .compose(
            uploads.pending(),
            &settings,
            |pct| {
                eprint!("\rcompositing {pct:>3}%");
                let _ = std::io::stderr().flush();
            },
            &cancel,
        )
        .await?;
    eprintln!();
    for index in &summary.skipped {
        eprintln!("skipped '{}'", args.images[*index].display());
    }

    create_dir(&args.out_dir)?;
    write_file(&args.out_dir.join(&summary.file_name), &summary.png)?;
    eprintln!("{}", summary.subtitle);
    Ok(())
}

fn create_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create output dir '{}'", dir.display()))
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
