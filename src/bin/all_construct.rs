use std::env;

use all_construct::{ConstructorBuilder, WordBank};

const DEMOS: &[(&str, &[&str])] = &[
    ("jwajalapa", &["jwa", "j", "w", "a", "la", "lapa"]),
    ("rajamati", &["s", "raj", "amat", "raja", "ma", "i", "t"]),
    (
        "hexagonosaurus",
        &["h", "ex", "hex", "ag", "ago", "ru", "auru", "rus", "go", "no", "o", "s"],
    ),
];

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("all_construct: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let requests: Vec<(String, Vec<String>)> = match options.target.clone() {
        Some(target) => vec![(target, options.words.clone())],
        None => DEMOS
            .iter()
            .map(|(t, words)| (t.to_string(), words.iter().map(|w| w.to_string()).collect()))
            .collect(),
    };

    for (target, words) in &requests {
        if let Err(err) = run_one(&options, target, words) {
            eprintln!("all_construct: {target}: {err}");
            std::process::exit(1);
        }
    }
}

fn run_one(options: &Options, target: &str, words: &[String]) -> Result<(), String> {
    let bank = WordBank::new(words.iter().cloned()).map_err(|e| e.to_string())?;
    let mut builder = ConstructorBuilder::new(target, &bank);
    if let Some(limit) = options.limit {
        builder = builder.with_limit(limit);
    }
    let constructor = builder.build().map_err(|e| e.to_string())?;

    if options.count_only {
        match options.format {
            OutputFormat::List => println!("{target}: {}", constructor.count()),
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "target": target, "count": constructor.count().to_string() })
            ),
        }
        return Ok(());
    }

    let all = constructor.run().map_err(|e| e.to_string())?;
    options.format.write(target, &all)
}

struct Options {
    format: OutputFormat,
    limit: Option<usize>,
    count_only: bool,
    target: Option<String>,
    words: Vec<String>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::List;
        let mut limit = None;
        let mut count_only = false;
        let mut positional = Vec::new();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--limit=") {
                limit = Some(parse_limit(value)?);
            } else if arg == "--limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --limit".to_string())?
                    .into();
                limit = Some(parse_limit(&value)?);
            } else if arg == "--count" {
                count_only = true;
            } else if arg.starts_with('-') && arg.len() > 1 {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                positional.push(arg);
            }
        }

        if count_only && limit.is_some() {
            return Err("--limit cannot be combined with --count".to_string());
        }

        let mut positional = positional.into_iter();
        let target = positional.next();
        let words = positional.collect();

        Ok(Self {
            format,
            limit,
            count_only,
            target,
            words,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: all_construct [options] [<target> [word ...]]

With no target, prints the built-in demonstrations.

Options:
  --format <list|json>   Output format (default: list)
  --limit <N>            Abort once more than N decompositions are built
  --count                Print only the number of decompositions (no --limit)
  -h, --help             Print this help message

Examples:
  all_construct
  all_construct purple purp p ur le purpl
  all_construct --count aaaaaaaaaaaaaaaaaaaa a aa
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "limit must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    List,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "list" => Ok(Self::List),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, target: &str, all: &[Vec<&str>]) -> Result<(), String> {
        match self {
            OutputFormat::List => {
                println!("{target}: {} decomposition(s)", all.len());
                for decomposition in all {
                    println!("  {}", decomposition.join(" + "));
                }
                Ok(())
            }
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "target": target,
                    "decompositions": all,
                });
                let text = serde_json::to_string(&value).map_err(|e| e.to_string())?;
                println!("{text}");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        Options::parse(args.iter().copied())
    }

    #[test]
    fn positional_args_are_target_then_words() {
        let opts = parse(&["--limit", "10", "purple", "purp", "le"]).unwrap();
        assert_eq!(opts.target.as_deref(), Some("purple"));
        assert_eq!(opts.words, ["purp", "le"]);
        assert_eq!(opts.limit, Some(10));
        assert!(!opts.count_only);
    }

    #[test]
    fn count_rejects_limit() {
        let err = parse(&["--count", "--limit=5", "aaaa", "a"]).err().unwrap();
        assert!(err.contains("--limit"), "{err}");
        assert!(parse(&["--count", "aaaa", "a"]).unwrap().count_only);
    }

    #[test]
    fn unknown_short_flag_is_rejected() {
        let err = parse(&["-x", "abc", "a"]).err().unwrap();
        assert_eq!(err, "unrecognized argument '-x'");
        let err = parse(&["--bogus"]).err().unwrap();
        assert_eq!(err, "unrecognized argument '--bogus'");
    }

    #[test]
    fn lone_dash_stays_positional() {
        let opts = parse(&["-", "-"]).unwrap();
        assert_eq!(opts.target.as_deref(), Some("-"));
        assert_eq!(opts.words, ["-"]);
    }
}
