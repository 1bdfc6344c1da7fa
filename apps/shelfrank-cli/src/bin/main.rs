use anyhow::Context;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use shelfrank_core::catalog::JsonFileCatalog;
use shelfrank_core::config::{expand_path, Config};
use shelfrank_core::types::SearchResult;
use shelfrank_hybrid::HybridSearchEngine;

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {} <search|stats> [args...]", prog);
        eprintln!("  {} search \"<query>\" [catalog.json]", prog);
        eprintln!("  {} stats [catalog.json]", prog);
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn print_table(query: &str, results: &[SearchResult]) {
    println!("Found {} results for: \"{}\"", results.len(), query);
    for (i, hit) in results.iter().enumerate() {
        let r = &hit.record;
        println!(
            "  {}. score={:.3}  (lexical={:.3} fuzzy={:.2})  id={}  {} by {} [{}] condition={}",
            i + 1,
            hit.score,
            hit.lexical,
            hit.fuzzy,
            r.id,
            r.title(),
            r.author(),
            r.genre(),
            r.condition(),
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    let (cmd, args) = parse_args();

    let catalog_arg = match cmd.as_str() {
        "search" => args.get(1),
        _ => args.first(),
    };
    let catalog_path: PathBuf = catalog_arg.map(PathBuf::from).unwrap_or_else(|| expand_path(&settings.data.catalog_path));
    let engine = HybridSearchEngine::from_settings(JsonFileCatalog::new(&catalog_path), &settings)?;

    match cmd.as_str() {
        "search" => {
            let query = args.first().cloned().unwrap_or_else(|| {
                eprintln!("Usage: shelfrank search \"<query>\" [catalog.json]"); std::process::exit(1)
            });
            let results = engine
                .search(&query)
                .with_context(|| format!("search over {} failed", catalog_path.display()))?;
            if env::var("APP_OUTPUT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_table(&query, &results);
            }
        }
        "stats" => {
            let stats = engine.stats()?;
            println!("Catalog: {}", catalog_path.display());
            println!("  documents:       {}", stats.documents);
            println!("  vocabulary:      {}", stats.vocabulary);
            println!("  empty documents: {}", stats.empty_documents);
        }
        _ => { eprintln!("Unknown command: {}", cmd); std::process::exit(1); }
    }
    Ok(())
}
