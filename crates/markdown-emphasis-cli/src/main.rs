use anyhow::{Context, Result};
use markdown_emphasis_config::Config;
use markdown_emphasis_engine::{
    InlineOptions, InlineParser, parse_document, parsing::snapshot::render,
};
use std::{
    env,
    fmt::Write as _,
    io::{self, Read},
    path::PathBuf,
    process,
};

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    stats: bool,
    file: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut parsed = Args::default();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--stats" => parsed.stats = true,
            flag if flag.starts_with("--") => return None,
            path if parsed.file.is_none() => parsed.file = Some(PathBuf::from(path)),
            _ => return None,
        }
    }
    Some(parsed)
}

fn inline_options(config: &Config) -> InlineOptions {
    InlineOptions {
        max_nesting: config.max_nesting,
        wikilinks: config.wikilinks,
    }
}

/// One line per paragraph: `start..end<TAB>tokens`, followed by the resolver
/// counters when `stats` is set.
fn render_document(text: &str, parser: &InlineParser, stats: bool) -> String {
    let doc = parse_document(text, parser);
    let mut out = String::new();

    for block in &doc.blocks {
        let _ = writeln!(
            out,
            "{}..{}\t{}",
            block.span.start,
            block.span.end,
            render(text, &block.tokens)
        );
        if stats {
            let s = block.stats;
            let _ = writeln!(
                out,
                "\tqueries={} caches={} records={} search_steps={}",
                s.queries, s.caches, s.records, s.search_steps
            );
        }
    }

    out
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let Some(opts) = parse_args(&args) else {
        eprintln!("Usage: {} [--stats] [FILE]", args[0]);
        process::exit(1);
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let text = match &opts.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let parser = InlineParser::new(inline_options(&config));
    print!("{}", render_document(&text, &parser, opts.stats));
    Ok(())
}
