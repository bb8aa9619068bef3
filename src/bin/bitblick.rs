//! bitblick CLI — numeric literals to aligned binary lines.

use bitblick::{render, GroupSpec, RenderOptions};
use clap::Parser;
use std::io::{IsTerminal, Read, Write};
use std::process;

#[derive(Parser)]
#[command(name = "bitblick", about = "Numeric literals as aligned binary", version, allow_negative_numbers = true)]
struct Cli {
    /// Numeric literals (decimal, octal, binary, hex); '-' reads
    /// whitespace-separated literals from stdin
    #[arg(required = true, value_name = "LITERAL")]
    literals: Vec<String>,

    /// Output width in bits (default: smallest of 8/16/32/64 that fits)
    #[arg(short, long, value_name = "BITS")]
    width: Option<usize>,

    /// Group size (e.g. 4) or colon-separated field spec (e.g. :6:3:5)
    #[arg(short, long, value_name = "SPEC")]
    group: Option<String>,

    /// Convey group boundaries by color instead of spaces
    #[arg(short, long)]
    color: bool,

    /// Print a bit-position ruler above the values
    #[arg(short, long)]
    number: bool,

    /// Numbering origin
    #[arg(long, value_name = "N", default_value_t = 0, allow_hyphen_values = true)]
    number_from: i64,

    /// Number from the most-significant bit toward the least instead
    #[arg(short, long)]
    reverse: bool,

    /// Emphasize runs of set bits
    #[arg(long)]
    on: bool,

    /// Emphasize runs of clear bits
    #[arg(long)]
    off: bool,
}

impl Cli {
    fn to_options(&self) -> Result<RenderOptions, String> {
        let group = match &self.group {
            Some(spec) => {
                GroupSpec::parse(spec).map_err(|e| format!("Ungueltige Gruppierung: {e}"))?
            }
            None => GroupSpec::uniform(0),
        };
        Ok(RenderOptions::default()
            .with_width(self.width)
            .with_group(group)
            .with_color(self.color)
            .with_number_bits(self.number)
            .with_number_from(self.number_from)
            .with_reverse_numbering(self.reverse)
            .with_highlight_on(self.on)
            .with_highlight_off(self.off))
    }
}

/// Liest die Literale: direkt aus den Argumenten, oder bei einem
/// einzelnen `-` als Whitespace-getrennte Tokens von stdin.
fn collect_literals(args: &[String]) -> Result<Vec<String>, String> {
    if args.len() != 1 || args[0] != "-" {
        return Ok(args.to_vec());
    }
    if std::io::stdin().is_terminal() {
        eprintln!("Lese Literale von stdin (Ctrl+D zum Beenden)...");
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("Lesefehler (stdin): {e}"))?;
    let literals: Vec<String> = buf.split_whitespace().map(str::to_string).collect();
    if literals.is_empty() {
        return Err("keine Literale auf stdin".into());
    }
    Ok(literals)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Fehler: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    // Im Farb-Modus tragen allein die Escape-Codes die Gruppengrenzen;
    // sie muessen daher auch ohne Terminal (Pipe) erhalten bleiben.
    if cli.color {
        colored::control::set_override(true);
    }

    let literals = collect_literals(&cli.literals)?;
    let opts = cli.to_options()?;

    let refs: Vec<&str> = literals.iter().map(String::as_str).collect();
    let lines = render(&opts, &refs).map_err(|e| e.to_string())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        writeln!(out, "{line}").map_err(|e| format!("Schreibfehler: {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("CLI parse failed")
    }

    #[test]
    fn literals_are_required() {
        assert!(Cli::try_parse_from(["bitblick"]).is_err());
    }

    #[test]
    fn to_options_maps_all_flags() {
        let cli = parse_cli(&[
            "bitblick", "255", "-w", "16", "-g", "4", "-c", "-n",
            "--number-from", "1", "-r", "--on", "--off",
        ]);
        let opts = cli.to_options().unwrap();
        assert_eq!(opts.width(), Some(16));
        assert_eq!(opts.group(), &GroupSpec::uniform(4));
        assert!(opts.color());
        assert!(opts.number_bits());
        assert_eq!(opts.number_from(), 1);
        assert!(opts.reverse_numbering());
        assert!(opts.highlight_on());
        assert!(opts.highlight_off());
    }

    #[test]
    fn to_options_parses_field_spec() {
        let cli = parse_cli(&["bitblick", "0xc0ded", "-g", ":6:3:5"]);
        let opts = cli.to_options().unwrap();
        assert_eq!(opts.group(), &GroupSpec::parse(":6:3:5").unwrap());
    }

    #[test]
    fn to_options_rejects_bad_group_spec() {
        let cli = parse_cli(&["bitblick", "1", "-g", "4:x"]);
        let err = cli.to_options().unwrap_err();
        assert!(err.contains("Ungueltige Gruppierung"), "{err}");
    }

    /// "-1" is a literal, not a flag.
    #[test]
    fn negative_literal_is_positional() {
        let cli = parse_cli(&["bitblick", "-1"]);
        assert_eq!(cli.literals, ["-1"]);
    }

    #[test]
    fn negative_numbering_origin_parses() {
        let cli = parse_cli(&["bitblick", "1", "--number-from", "-4"]);
        assert_eq!(cli.number_from, -4);
    }

    #[test]
    fn collect_literals_passes_arguments_through() {
        let args = vec!["255".to_string(), "-1".to_string()];
        assert_eq!(collect_literals(&args).unwrap(), args);
    }
}
