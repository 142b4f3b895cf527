
use std::{fs, path::PathBuf, process::ExitCode};
use clap::Parser;
use console::style;
use itertools::Itertools;
use tracing::Level;

use poetry_forms::{Error, Result};
use poetry_forms::config::Config;
use poetry_forms::forms::find_form;
use poetry_forms::poem::{check_poem, PoemReport};

#[derive(Parser, Debug)]
#[command(about = "Check a poem against a poetry form")]
struct Args {
  /// Name of the form, as it appears in the forms catalog
  #[arg(short, long)]
  form: String,

  poem: PathBuf,

  #[arg(long)]
  dictionary: Option<PathBuf>,

  #[arg(long)]
  forms: Option<PathBuf>,

  /// Print the report as JSON
  #[arg(long)]
  json: bool,

  #[arg(short, long)]
  verbose: bool,
}

fn print_report(form: &str, report: &PoemReport) {
  if report.is_valid() {
    println!("{}", style(format!("The poem is a valid {}.", form)).green());
    return;
  }

  if !report.syllable_violations.is_empty() {
    println!("{}", style("Lines with the wrong number of syllables:").red().bold());
    for line in &report.syllable_violations {
      println!("  {}", line);
    }
  }

  if !report.rhyme_violations.is_empty() {
    println!("{}", style("Lines that should rhyme but don't:").red().bold());
    for group in &report.rhyme_violations {
      println!("  {}", group.iter().map(|l| style(l).yellow()).join(" / "));
    }
  }
}

fn run(args: &Args) -> Result<bool> {
  let config = Config::from_env().with_overrides(args.dictionary.clone(), args.forms.clone());

  let catalog = config.load_forms()?;
  let pattern = find_form(&catalog, &args.form)?;
  let dictionary = config.load_dictionary()?;
  let poem = fs::read_to_string(&args.poem).map_err(Error::io_at(&args.poem))?;

  let report = check_poem(&poem, pattern, &dictionary)?;

  if args.json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    print_report(&args.form, &report);
  }

  Ok(report.is_valid())
}

fn main() -> ExitCode {
  let args = Args::parse();

  tracing_subscriber::fmt()
    .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
    .with_writer(std::io::stderr)
    .init();

  match run(&args) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::from(1),
    Err(e) => {
      eprintln!("{} {}", style("error:").red().bold(), e);
      ExitCode::from(2)
    }
  }
}
