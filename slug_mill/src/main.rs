//! CLI entry point for slug_mill.
//! Usage: slug_mill [OPTIONS] [TEXT]...
//!
//! With TEXT arguments, the words are joined with spaces and slugified as
//! one string. Without them, each stdin line is slugified onto its own
//! output line. The library stays silent; all reporting happens here.

use std::io::{self, BufRead};
use std::{env, fs, process};

use log::{debug, info};

use slug_mill::{SLUG_MILL_VERSION, SlugOptions, UnicodeRange, slugify_with};

const USAGE: &str = "Usage:
  slug_mill [OPTIONS] [TEXT]...

With no TEXT, slugifies each line read from stdin.

Options:
  --separator <S>                token separator (default '-')
  --no-lowercase                 keep the input's letter case
  --no-decamelize                do not split camelCase words
  --preserve-leading-underscore  keep a single leading '_' from the input
  --replace <FROM=TO>            literal replacement, may repeat; FROM=
                                 deletes FROM
  --range <LOW-HIGH>             hex code points to pass through verbatim,
                                 e.g. 4E00-9FFF
  --config <FILE.toml>           load options from a TOML file; explicit
                                 flags override it
  --version                      print version and exit";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (options, text_args) = parse_args(&args);
    debug!("resolved options: {options:?}");

    if text_args.is_empty() {
        info!("no TEXT arguments; slugifying stdin line by line");
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.unwrap_or_else(|e| {
                eprintln!("error: reading stdin: {e}");
                process::exit(1);
            });
            println!("{}", slugify_or_die(&line, &options));
        }
    } else {
        let text = text_args.join(" ");
        println!("{}", slugify_or_die(&text, &options));
    }
}

fn slugify_or_die(text: &str, options: &SlugOptions) -> String {
    slugify_with(text, options).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    })
}

/// Hand-rolled flag loop: flags may appear anywhere, everything else is
/// TEXT. A `--config` file is applied first so later flags override it.
fn parse_args(args: &[String]) -> (SlugOptions, Vec<String>) {
    let mut options = SlugOptions::default();
    let mut text = Vec::new();

    // First pass: config file only, so flag order doesn't matter.
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--config" {
            let path = require_value(args, i, "--config", "a TOML filepath");
            options = load_config(path);
            i += 2;
            continue;
        }
        i += 1;
    }

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("{USAGE}");
                process::exit(0);
            },
            "--version" => {
                println!("slug_mill {SLUG_MILL_VERSION}");
                process::exit(0);
            },
            "--config" => {
                i += 2; // already applied in the first pass
            },
            "--separator" => {
                options.separator = require_value(args, i, "--separator", "a string").clone();
                i += 2;
            },
            "--no-lowercase" => {
                options.lowercase = false;
                i += 1;
            },
            "--no-decamelize" => {
                options.decamelize = false;
                i += 1;
            },
            "--preserve-leading-underscore" => {
                options.preserve_leading_underscore = true;
                i += 1;
            },
            "--replace" => {
                let pair = require_value(args, i, "--replace", "FROM=TO");
                let Some((from, to)) = pair.split_once('=') else {
                    eprintln!("--replace wants FROM=TO, got '{pair}'");
                    process::exit(2);
                };
                options
                    .custom_replacements
                    .push((from.to_string(), to.to_string()));
                i += 2;
            },
            "--range" => {
                let spec = require_value(args, i, "--range", "LOW-HIGH hex code points");
                options.unicode_range = Some(parse_range(spec));
                i += 2;
            },
            s if s.starts_with("--") => {
                eprintln!("unknown option: {s}\n{USAGE}");
                process::exit(2);
            },
            s => {
                text.push(s.to_string());
                i += 1;
            },
        }
    }

    (options, text)
}

fn require_value<'a>(args: &'a [String], i: usize, flag: &str, what: &str) -> &'a String {
    args.get(i + 1).unwrap_or_else(|| {
        eprintln!("{flag} requires {what}");
        process::exit(2);
    })
}

fn load_config(path: &str) -> SlugOptions {
    let raw = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: unable to read '{path}': {e}");
        process::exit(1);
    });
    toml::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("error: parsing '{path}': {e}");
        process::exit(1);
    })
}

fn parse_range(spec: &str) -> UnicodeRange {
    let parsed = spec.split_once('-').and_then(|(low, high)| {
        let low = u32::from_str_radix(low.trim_start_matches("0x"), 16).ok()?;
        let high = u32::from_str_radix(high.trim_start_matches("0x"), 16).ok()?;
        Some((low, high))
    });
    let Some((low, high)) = parsed else {
        eprintln!("--range wants LOW-HIGH hex code points, e.g. 4E00-9FFF; got '{spec}'");
        process::exit(2);
    };
    UnicodeRange::new(low, high).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(2);
    })
}
