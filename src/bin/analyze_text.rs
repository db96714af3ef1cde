use anyhow::Context;
use std::io::Read;
use textkit_lib::services::config_store::load_config;
use textkit_lib::services::detection::{compute_signals, validate_text, TextHeuristicAnalyzer};

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

/// First argument that is neither a flag nor a flag's value.
fn input_path(args: &[String]) -> Option<String> {
    let mut skip_next = false;
    for arg in args.iter().skip(1) {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--seed" || arg == "--out" {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        return Some(arg.clone());
    }
    None
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if has_flag(&args, "--help") {
        eprintln!(
            "Usage:\n  analyze_text [<path>|-] [--seed <u64>] [--signals] [--out <json_path>]\n\nReads stdin when no path (or `-`) is given.\n  --seed     pin the random source for reproducible scores\n  --signals  print the per-signal score breakdown to stderr"
        );
        return Ok(());
    }

    let text = match input_path(&args).filter(|p| p != "-") {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("read {} failed", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin failed")?;
            buf
        }
    };

    let config = load_config().context("failed to load configuration")?;
    if let Err(e) = validate_text(&text, &config.analysis) {
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let seed = match parse_arg_value(&args, "--seed") {
        Some(s) => Some(s.parse::<u64>().with_context(|| format!("invalid --seed value: {}", s))?),
        None => None,
    };
    let mut analyzer = match seed {
        Some(seed) => TextHeuristicAnalyzer::seeded(seed),
        None => TextHeuristicAnalyzer::from_entropy(),
    };
    let response = analyzer.analyze(&text);

    if has_flag(&args, "--signals") {
        let signals = compute_signals(&text);
        eprintln!("{}", serde_json::to_string_pretty(&signals)?);
        eprintln!("base score (before jitter): {:.2}", signals.base_score());
    }

    let json = serde_json::to_string_pretty(&response)?;
    match parse_arg_value(&args, "--out") {
        Some(out_path) => {
            std::fs::write(&out_path, &json).with_context(|| format!("write {} failed", out_path))?;
            eprintln!("Wrote JSON: {}", out_path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
