
use std::path::PathBuf;
use clap::Parser;
use console::style;
use itertools::Itertools;

use poetry_forms::config::Config;
use poetry_forms::forms::catalog_to_json;

#[derive(Parser, Debug)]
#[command()]
struct Args {
  #[arg(long)]
  forms: Option<PathBuf>,

  #[arg(long)]
  json: bool,
}

// 0 means any number of syllables.
fn syllable_label(syllables: u32) -> String {
  if syllables == 0 { "-".to_owned() } else { syllables.to_string() }
}

fn main() -> poetry_forms::Result<()> {
  let args = Args::parse();

  tracing_subscriber::fmt().with_writer(std::io::stderr).init();

  let config = Config::from_env().with_overrides(None, args.forms);
  let catalog = config.load_forms()?;

  if args.json {
    println!("{}", catalog_to_json(&catalog)?);
    return Ok(());
  }

  println!("Read {} forms", catalog.len());
  println!();

  for (name, pattern) in &catalog {
    println!("{}", style(name).bold());
    println!("  syllables: {}", pattern.syllables().iter().map(|&s| syllable_label(s)).join(" "));
    println!("  rhymes:    {}", pattern.rhymes().iter().join(" "));
  }

  Ok(())
}
