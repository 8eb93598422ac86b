use anyhow::{Context, Result, bail};
use clap::Parser;
use montecarlo::{Analyzer, Die, Face, Form, Game, ResultsView, seeded_rng};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "montecarlo")]
#[command(about = "Monte Carlo experiments with weighted dice")]
struct Args {
    /// Comma-separated die faces; numeric when every entry parses as a number
    #[arg(long, default_value = "1,2,3,4,5,6")]
    faces: String,

    /// Number of similar dice in the game
    #[arg(long, default_value_t = 2)]
    dice: usize,

    /// Number of rolls per die
    #[arg(long, default_value_t = 1000)]
    rolls: usize,

    /// RNG seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Per-face weight override, FACE=WEIGHT (repeatable; applied to every die)
    #[arg(long = "weight", value_name = "FACE=WEIGHT")]
    weights: Vec<String>,

    /// Also dump the roll table: wide | narrow
    #[arg(long)]
    form: Option<String>,

    /// Emit the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    rolls: usize,
    dice: usize,
    seed: u64,
    jackpots: usize,
    face_totals: Vec<(String, usize)>,
    combinations: Vec<(Vec<String>, usize)>,
    permutations: Vec<(Vec<String>, usize)>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let faces = parse_faces(&args.faces)?;
    let numeric = faces.iter().all(Face::is_numeric);
    if args.dice == 0 {
        bail!("a game needs at least one die (--dice)");
    }

    let mut dice = Vec::with_capacity(args.dice);
    for _ in 0..args.dice {
        let mut die = Die::new(faces.clone()).context("building die")?;
        for spec in &args.weights {
            let (face, weight) = parse_weight(spec, numeric)?;
            die.set_weight(face, weight)
                .with_context(|| format!("applying weight override '{spec}'"))?;
        }
        dice.push(die);
    }

    let mut game = Game::new(dice).context("building game")?;
    let mut rng = seeded_rng(args.seed);
    game.play(args.rolls, &mut rng).context("playing game")?;

    if let Some(form) = &args.form {
        let form: Form = form.parse()?;
        match game.results(form)? {
            ResultsView::Wide(table) => print!("{table}"),
            ResultsView::Narrow(records) => {
                for record in records {
                    println!("{:>4}  die {}  {}", record.roll, record.die, record.face);
                }
            }
        }
        println!();
    }

    let report = build_report(&args, &Analyzer::new(&game)?);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn build_report(args: &Args, analyzer: &Analyzer) -> Report {
    let counts = analyzer.face_counts_per_roll();
    let face_totals = counts
        .faces
        .iter()
        .enumerate()
        .map(|(col, face)| {
            let total = counts.rows.iter().map(|row| row[col]).sum();
            (face.to_string(), total)
        })
        .collect();

    let render = |key: &[Face]| -> Vec<String> { key.iter().map(ToString::to_string).collect() };
    Report {
        rolls: args.rolls,
        dice: args.dice,
        seed: args.seed,
        jackpots: analyzer.jackpot(),
        face_totals,
        combinations: analyzer
            .combo_count()
            .iter()
            .map(|(key, n)| (render(key), *n))
            .collect(),
        permutations: analyzer
            .permutation_count()
            .iter()
            .map(|(key, n)| (render(key), *n))
            .collect(),
    }
}

fn print_report(report: &Report) {
    println!(
        "rolls: {}  dice: {}  seed: {}",
        report.rolls, report.dice, report.seed
    );
    println!(
        "jackpots: {} ({:.1}%)",
        report.jackpots,
        100.0 * report.jackpots as f64 / report.rolls as f64
    );
    println!("face totals:");
    for (face, total) in &report.face_totals {
        println!("  {face:>8}  {total}");
    }
    println!("combinations ({}):", report.combinations.len());
    for (key, n) in &report.combinations {
        println!("  {:>12}  {n}", key.join(" "));
    }
    println!("permutations ({}):", report.permutations.len());
    for (key, n) in &report.permutations {
        println!("  {:>12}  {n}", key.join(" "));
    }
}

/// All-numeric token lists make a numeric die; anything else makes every
/// face text.
fn parse_faces(spec: &str) -> Result<Vec<Face>> {
    let tokens: Vec<&str> = spec
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        bail!("--faces needs at least one value");
    }
    let numeric: Option<Vec<f64>> = tokens.iter().map(|t| t.parse().ok()).collect();
    Ok(match numeric {
        Some(values) => values.into_iter().map(Face::from).collect(),
        None => tokens.into_iter().map(Face::from).collect(),
    })
}

fn parse_weight(spec: &str, numeric: bool) -> Result<(Face, f64)> {
    let (face, weight) = spec
        .split_once('=')
        .with_context(|| format!("weight override '{spec}' is not FACE=WEIGHT"))?;
    let weight: f64 = weight
        .trim()
        .parse()
        .with_context(|| format!("weight in '{spec}' is not a number"))?;
    let face = face.trim();
    let face = if numeric {
        Face::from(
            face.parse::<f64>()
                .with_context(|| format!("face in '{spec}' is not numeric like the die"))?,
        )
    } else {
        Face::from(face)
    };
    Ok((face, weight))
}
