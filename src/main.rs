use std::path::PathBuf;

use clap::Parser;
use semver::Version;

use collection_versioner::collection::{FileCollectionLoader, PostmanClient};
use collection_versioner::config::{
    DEFAULT_BASE_URL, DEFAULT_COLLECTION_PATH, DEFAULT_LATEST_NAME, DEFAULT_SCHEMA,
    DEFAULT_SEED_VERSION, DEFAULT_VERSION_PREFIX, VersionerConfig,
};
use collection_versioner::logging;
use collection_versioner::versioning::Versioner;

#[derive(Parser)]
#[command(name = "collection-versioner")]
#[command(version, about = "Snapshot the latest API collection and replace it")]
struct Cli {
    /// API key sent with every request
    #[arg(long, env = "POSTMAN_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Uid of the latest collection, used when it is not found by name
    #[arg(long, env = "COLLECTION_UID")]
    collection_uid: Option<String>,

    /// Base URL of the collections API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Display name of the latest collection
    #[arg(long, default_value = DEFAULT_LATEST_NAME)]
    latest_name: String,

    /// Prefix of snapshot names
    #[arg(long, default_value = DEFAULT_VERSION_PREFIX)]
    version_prefix: String,

    /// Version used when no collection name carries one
    #[arg(long, default_value_t = DEFAULT_SEED_VERSION)]
    seed_version: Version,

    /// Generated collection that becomes the new latest
    #[arg(long, default_value = DEFAULT_COLLECTION_PATH)]
    collection_file: PathBuf,

    /// Resolve the snapshot name without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn versioner_config(&self) -> VersionerConfig {
        VersionerConfig {
            latest_name: self.latest_name.clone(),
            fallback_uid: self.collection_uid.clone(),
            version_prefix: self.version_prefix.clone(),
            seed_version: self.seed_version.clone(),
            default_schema: DEFAULT_SCHEMA.to_string(),
            collection_path: self.collection_file.clone(),
            dry_run: self.dry_run,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    let config = cli.versioner_config();
    let client = PostmanClient::new(&cli.base_url, &cli.api_key)?;
    let loader = FileCollectionLoader::new(&config.collection_path);

    let report = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(Versioner::new(client, loader, config).run())?;

    println!("Summary:");
    match report.snapshot_uid {
        Some(snapshot_uid) => {
            println!(
                "- Created versioned snapshot: {:?} (uid: {})",
                report.versioned_name, snapshot_uid
            );
            println!("- Updated latest collection (uid: {})", report.latest_uid);
        }
        None => {
            println!("- Dry run, next snapshot would be {:?}", report.versioned_name);
            println!("- Latest collection (uid: {})", report.latest_uid);
        }
    }

    Ok(())
}
