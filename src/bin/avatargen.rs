use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

const ASSETS_ENV: &str = "AVATARGEN_ASSETS";

#[derive(Parser, Debug)]
#[command(name = "avatargen", version)]
struct Cli {
    /// Assets root (defaults to $AVATARGEN_ASSETS, then ./data).
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Log selection and IO details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one avatar file.
    Generate(GenerateArgs),
    /// Generate one avatar per username, in parallel.
    Batch(BatchArgs),
    /// Print how many options each layer has.
    Catalog(CatalogArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CategoryChoice {
    Male,
    Female,
    Monster,
}

impl From<CategoryChoice> for avatargen::Category {
    fn from(choice: CategoryChoice) -> Self {
        match choice {
            CategoryChoice::Male => avatargen::Category::Male,
            CategoryChoice::Female => avatargen::Category::Female,
            CategoryChoice::Monster => avatargen::Category::Monster,
        }
    }
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Character category.
    #[arg(value_enum)]
    category: CategoryChoice,

    /// Output file; the extension picks the format (jpg/jpeg, gif, anything else is png).
    #[arg(short, long)]
    out: PathBuf,

    /// Derive the avatar from this username instead of the clock.
    #[arg(short, long, conflicts_with = "seed")]
    username: Option<String>,

    /// Use an explicit seed.
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i64>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Character category.
    #[arg(value_enum)]
    category: CategoryChoice,

    /// Directory to write `<username>.<ext>` files into.
    #[arg(long)]
    out_dir: PathBuf,

    /// Output extension.
    #[arg(long, default_value = "png")]
    ext: String,

    /// Usernames to render.
    #[arg(required = true)]
    usernames: Vec<String>,
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let assets_root = resolve_assets_root(cli.assets.as_deref());
    let generator = avatargen::Generator::from_assets_dir(&assets_root)
        .with_context(|| format!("load asset catalog from '{}'", assets_root.display()))?;

    match cli.cmd {
        Command::Generate(args) => cmd_generate(&generator, args),
        Command::Batch(args) => cmd_batch(&generator, args),
        Command::Catalog(args) => cmd_catalog(&generator, args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_assets_root(flag: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| std::env::var_os(ASSETS_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_generate(generator: &avatargen::Generator, args: GenerateArgs) -> anyhow::Result<()> {
    let category = avatargen::Category::from(args.category);
    let seed = match (&args.username, args.seed) {
        (Some(name), _) => avatargen::Seed::from_username(name),
        (None, Some(raw)) => avatargen::Seed(raw),
        (None, None) => avatargen::Seed::from_clock(),
    };

    let canvas = generator.generate_with_seed(category, seed)?;
    ensure_parent_dir(&args.out)?;
    avatargen::write_file(&canvas, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_batch(generator: &avatargen::Generator, args: BatchArgs) -> anyhow::Result<()> {
    let category = avatargen::Category::from(args.category);
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let results = generator.generate_many(category, &args.usernames);
    let mut failures = 0usize;
    for (name, result) in args.usernames.iter().zip(results) {
        let out = args
            .out_dir
            .join(format!("{}.{}", sanitize_file_stem(name), args.ext));
        match result.and_then(|canvas| avatargen::write_file(&canvas, &out)) {
            Ok(()) => eprintln!("wrote {}", out.display()),
            Err(err) => {
                failures += 1;
                eprintln!("{name}: {err}");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} avatars failed", args.usernames.len());
    }
    Ok(())
}

fn cmd_catalog(generator: &avatargen::Generator, args: CatalogArgs) -> anyhow::Result<()> {
    let summary = generator.catalog().summary();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serialize catalog summary")?
        );
        return Ok(());
    }

    if let Some(root) = &summary.root {
        println!("root: {root}");
    }
    println!("background: {}", summary.background);
    for (category, layers) in &summary.categories {
        println!("{category}:");
        for (layer, count) in layers {
            println!("  {layer:<8} {count}");
        }
    }
    Ok(())
}

fn sanitize_file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "_".to_string()
    } else {
        stem
    }
}
