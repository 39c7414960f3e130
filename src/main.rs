use anyhow::Result;
use clap::Parser;

use tagver::boundary::BoundaryWarning;
use tagver::config;
use tagver::domain::{next_version, BumpRequest, TagPrefix};
use tagver::git::{Git2Repository, Repository};
use tagver::resolver::LatestResolver;
use tagver::ui;
use tagver::TagverError;

#[derive(clap::Parser)]
#[command(name = "tagver", about = "Increment semver-style git tags")]
struct Args {
    #[arg(long, help = "Tag prefix, e.g. \"v\"")]
    prefix: Option<String>,

    #[arg(short = 'M', long, help = "Increase major version number")]
    major: bool,

    #[arg(short = 'm', long, help = "Increase minor version number")]
    minor: bool,

    #[arg(short = 'p', long, help = "Increase patch version number")]
    patch: bool,

    #[arg(short, long, help = "Set version explicitly, e.g. -s \"v15.8.14\"")]
    set: Option<String>,

    #[arg(short, long, help = "Print latest version and exit")]
    latest: bool,

    #[arg(long, help = "Push the created tag to the remote")]
    push: bool,

    #[arg(long, help = "Remote to push to")]
    remote: Option<String>,

    #[arg(long, help = "Abort on the first malformed tag instead of skipping it")]
    strict: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("tagver {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration; CLI flags override file values
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let prefix = TagPrefix::new(args.prefix.unwrap_or(config.prefix));
    let strict = args.strict || config.strict;
    let push = args.push || config.push;
    let remote = args.remote.unwrap_or(config.remote);

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let raw_tags = match repo.list_tags() {
        Ok(tags) => tags,
        Err(e) => {
            ui::display_error(&format!("Tags could not be loaded: {}", e));
            std::process::exit(1);
        }
    };

    // Resolve the latest existing version (zero baseline when none)
    let resolver = LatestResolver::new(prefix.clone(), strict);
    let outcome = match resolver.resolve(&raw_tags) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    for warning in &outcome.warnings {
        ui::display_boundary_warning(warning);
    }
    let latest = outcome.latest;

    if args.latest {
        println!("{}", prefix.format(&latest));
        return Ok(());
    }

    let bump = BumpRequest::new(args.major, args.minor, args.patch);

    if bump.is_empty() && args.set.is_none() {
        // No bump requested: report the current latest and stop.
        println!("{}", prefix.format(&latest));
        return Ok(());
    }

    // An explicit override beats any bump flags; its parse failure is fatal
    // since the user's intent cannot be silently discarded.
    let next = match next_version(&latest, &bump, args.set.as_deref(), &prefix) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let tag_name = prefix.format(&next);

    if !prefix.matches(&tag_name) {
        ui::display_boundary_warning(&BoundaryWarning::TagOutsidePattern {
            tag: tag_name.clone(),
            prefix: prefix.as_str().to_string(),
        });
    }

    let previous = outcome
        .from_existing_tag
        .then(|| prefix.format(&latest));
    ui::display_proposed_tag(previous.as_deref(), &tag_name);

    // Refuse to recreate an existing tag
    match repo.find_tag_oid(&tag_name) {
        Ok(Some(_)) => {
            ui::display_error(&TagverError::duplicate(tag_name.as_str()).to_string());
            std::process::exit(1);
        }
        Ok(None) => {}
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    let tagger = match repo.tagger() {
        Ok(tagger) => tagger,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.dry_run {
        ui::display_status("Dry run:");
        ui::display_success(&format!("  would create tag {} at HEAD", tag_name));
        if push {
            ui::display_success(&format!("  would push {} to {}", tag_name, remote));
        }
        return Ok(());
    }

    let head = match repo.head_oid() {
        Ok(oid) => oid,
        Err(e) => {
            ui::display_error(&format!("Cannot resolve HEAD: {}", e));
            std::process::exit(1);
        }
    };

    // Annotated tag; the message is conventionally the tag name itself
    let created = match repo.create_annotated_tag(&tag_name, head, &tagger, &tag_name) {
        Ok(oid) => oid,
        Err(e) => {
            ui::display_error(&format!("Unable to create tag: {}", e));
            std::process::exit(1);
        }
    };
    ui::display_created_tag(&tag_name, &created.to_string());

    if push {
        ui::display_status(&format!("Pushing tag {} to {}", tag_name, remote));
        if let Err(e) = repo.push_tags(&remote, &[&tag_name]) {
            ui::display_error(&format!("Failed to push tag '{}': {}", tag_name, e));
            std::process::exit(1);
        }
        ui::display_success(&format!("Pushed tag {} to {}", tag_name, remote));
    }

    Ok(())
}
