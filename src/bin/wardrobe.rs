use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use wardrobe::{
    AddMode, AddOutcome, AssetCatalog, AssetKind, AssetType, Composer, ComposerConfig,
    CompatibilityRules, RecordingSurface,
};

#[derive(Parser, Debug)]
#[command(name = "wardrobe", version)]
struct Cli {
    /// Log decisions to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog assets with their z-index.
    Catalog(CatalogArgs),
    /// Check one kind against another, e.g. `clothing/clothing-dress clothing/clothing-top`.
    Check(CheckArgs),
    /// Add assets to an empty canvas and print the resulting stack as JSON.
    Compose(ComposeArgs),
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Asset catalog JSON (array of assets). Defaults to the built-in sample catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Only list assets of this type.
    #[arg(long = "type")]
    asset_type: Option<String>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    candidate: String,
    existing: String,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Asset ids, added in order.
    #[arg(long = "add", required = true)]
    add: Vec<String>,

    /// Add despite compatibility conflicts.
    #[arg(long)]
    force: bool,

    /// Run the z-index repair sort after all adds.
    #[arg(long)]
    sort: bool,

    /// Composer config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Asset catalog JSON (array of assets).
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    match cli.cmd {
        Command::Catalog(args) => cmd_catalog(args),
        Command::Check(args) => cmd_check(args),
        Command::Compose(args) => cmd_compose(args),
    }
}

fn read_catalog(path: Option<&Path>) -> anyhow::Result<AssetCatalog> {
    let Some(path) = path else {
        return Ok(wardrobe::sample_catalog());
    };
    let f = File::open(path).with_context(|| format!("open catalog '{}'", path.display()))?;
    let assets: Vec<wardrobe::Asset> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse catalog JSON")?;
    Ok(AssetCatalog::from_assets(assets)?)
}

fn parse_type(s: &str) -> anyhow::Result<AssetType> {
    AssetType::ALL
        .into_iter()
        .find(|t| t.as_str() == s)
        .with_context(|| format!("unknown asset type '{s}'"))
}

/// `type` or `type/subtype`.
fn parse_kind(s: &str) -> anyhow::Result<AssetKind> {
    let (ty, sub) = match s.split_once('/') {
        Some((ty, sub)) => (ty, Some(sub)),
        None => (s, None),
    };
    let asset_type = parse_type(ty)?;
    let Some(sub) = sub else {
        return Ok(AssetKind::bare(asset_type));
    };
    let subtype = asset_type
        .subtypes()
        .iter()
        .copied()
        .find(|st| st.as_str() == sub)
        .with_context(|| format!("'{sub}' is not a subtype of '{ty}'"))?;
    Ok(AssetKind::new(asset_type, subtype))
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(args.catalog.as_deref())?;
    let filter = args.asset_type.as_deref().map(parse_type).transpose()?;

    let rows: Vec<_> = catalog
        .iter()
        .filter(|a| filter.is_none_or(|t| a.kind.asset_type == t))
        .map(|a| {
            serde_json::json!({
                "id": a.id,
                "name": a.name,
                "kind": a.kind.to_string(),
                "style": a.style,
                "z_index": wardrobe::rank(a.kind),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let candidate = parse_kind(&args.candidate)?;
    let existing = parse_kind(&args.existing)?;
    let verdict = CompatibilityRules::standard().check_compatible(candidate, existing);
    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => ComposerConfig::load(path)?,
        None => ComposerConfig::default(),
    };
    let catalog = read_catalog(args.catalog.as_deref())?;
    let mode = if args.force {
        AddMode::Forced
    } else {
        AddMode::Checked
    };

    let mut composer = Composer::new(config, RecordingSurface::new())?;
    let mut outcomes = Vec::with_capacity(args.add.len());
    for id in &args.add {
        let asset = catalog
            .get(id)
            .with_context(|| format!("unknown asset id '{id}'"))?;
        let outcome = composer.add_asset(asset, mode);
        if let AddOutcome::Rejected(report) = &outcome {
            for c in &report.conflicts {
                eprintln!("rejected {id}: {}", c.reason);
            }
        }
        outcomes.push(serde_json::json!({ "asset": id, "result": outcome }));
    }
    if args.sort {
        composer.sort_layers();
    }

    let out = serde_json::json!({
        "adds": outcomes,
        "layers": composer.layers().layers(),
        "order_overridden": composer.layers().order_overridden(),
        "surface_stack": composer.surface().stacked_images(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
