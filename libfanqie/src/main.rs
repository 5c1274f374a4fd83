use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use clap::Parser;
use libfanqie::{Composer, ComposerConfig, MandarinLayout};

/// Interactive Mandarin phonetic composition.
///
/// Reads key sequences from stdin (one syllable per line) and prints the
/// composed reading. `:layout <name>` switches the arrangement,
/// `:correction` toggles combination repair, `:quit` exits.
#[derive(Parser)]
#[command(name = "fanqie", version, about)]
struct Cli {
    /// Keyboard arrangement (dachen, dachen26, eten, eten26, hsu, ibm,
    /// mitac, seigyou, fakeseigyou, starlight, alvinliu, hanyu, secondary,
    /// yale, hualuo, universal, wadegiles)
    #[arg(long, default_value = "dachen")]
    layout: String,

    /// Enable phonetic combination correction
    #[arg(long)]
    correction: bool,

    /// Render as Hanyu Pinyin instead of Bopomofo
    #[arg(long)]
    pinyin: bool,

    /// Textbook rendering (tone diacritics / leading neutral tone)
    #[arg(long)]
    textbook: bool,

    /// Load settings from a TOML config file (flags still win)
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ComposerConfig::load_toml(path)?,
        None => ComposerConfig::default(),
    };
    if let Some(layout) = parse_layout_arg(&cli.layout)? {
        config.layout = layout;
    }
    config.base.correction_enabled |= cli.correction;
    config.base.pinyin_output |= cli.pinyin;
    config.base.textbook_style |= cli.textbook;

    let mut composer = Composer::from_config(&config);
    println!(
        "fanqie interactive composer - layout {}, correction {}",
        composer.layout().name(),
        if composer.correction_enabled() { "on" } else { "off" }
    );
    println!("type key sequences, :layout <name>, :correction, or :quit");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(rest) = line.strip_prefix(':') {
            let mut words = rest.split_whitespace();
            match words.next() {
                Some("quit") | Some("q") => break,
                Some("correction") => {
                    let enabled = !composer.correction_enabled();
                    composer.set_correction_enabled(enabled);
                    println!("correction {}", if enabled { "on" } else { "off" });
                }
                Some("layout") => match words.next().and_then(MandarinLayout::from_name) {
                    Some(layout) => {
                        composer.set_layout(layout);
                        composer.clear();
                        println!("layout {}", layout.name());
                    }
                    None => eprintln!("usage: :layout <name>"),
                },
                _ => eprintln!("unknown command: {line}"),
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let raw = composer.receive_sequence(line, false);
        let shown = composer.get_composition(config.base.pinyin_output, config.base.textbook_style);
        println!("{shown}    (raw: {raw:?}, inline: {})",
            composer.get_inline_composition_for_display(config.base.pinyin_output));
    }
    Ok(())
}

fn parse_layout_arg(name: &str) -> Result<Option<MandarinLayout>> {
    if name.is_empty() {
        return Ok(None);
    }
    MandarinLayout::from_name(name)
        .map(Some)
        .ok_or_else(|| anyhow!("unknown layout: {name}"))
}
