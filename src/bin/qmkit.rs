//! Quine-McCluskey minimizer - Command Line Interface

use clap::{Parser, ValueEnum};
use qmkit::{
    CoverStrategy, FormatterConfig, Function, KMap, Minimizer, QmError, VarSpace, DEFAULT_FMT_CFG,
    PROGRAMMING_FMT_CFG, WORDS_FMT_CFG,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Style {
    /// A'B + C
    Default,
    /// !A & B | C
    Programming,
    /// not A and B or C
    Words,
}

impl Style {
    fn config(self) -> &'static FormatterConfig<'static> {
        match self {
            Style::Default => &DEFAULT_FMT_CFG,
            Style::Programming => &PROGRAMMING_FMT_CFG,
            Style::Words => &WORDS_FMT_CFG,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "qmkit")]
#[command(about = "Quine-McCluskey minimization of a sum of products", long_about = None)]
#[command(version)]
struct Args {
    /// Number of variables
    #[arg(short = 'n', long, value_name = "INT")]
    variables: usize,

    /// True minterms (comma-separated indices)
    #[arg(short = 'm', long, value_delimiter = ',', conflicts_with = "maxterms")]
    minterms: Vec<usize>,

    /// False maxterms (comma-separated indices), all other indices are true
    #[arg(short = 'M', long, value_delimiter = ',')]
    maxterms: Vec<usize>,

    /// Don't-care indices (comma-separated)
    #[arg(short = 'd', long = "dont-cares", value_delimiter = ',')]
    dont_cares: Vec<usize>,

    /// Variable names, most significant first (comma-separated)
    #[arg(long, value_delimiter = ',')]
    names: Vec<String>,

    /// Search the smallest cover instead of the greedy one
    #[arg(long)]
    exact: bool,

    /// Notation of the expression
    #[arg(short = 's', long, value_enum, default_value = "default")]
    style: Style,

    /// Print the Karnaugh map of the function
    #[arg(short = 'k', long)]
    kmap: bool,

    /// Show the stages of the minimization (repeat for more details)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<(), QmError> {
    let function = match args.maxterms.is_empty() {
        true => Function::new(args.variables, &args.minterms, &args.dont_cares)?,
        false => Function::from_maxterms(args.variables, &args.maxterms, &args.dont_cares)?,
    };

    let names = match args.names.is_empty() {
        true => VarSpace::alphabetic(args.variables),
        false => VarSpace::from_names(&args.names)?,
    };
    let strategy = match args.exact {
        true => CoverStrategy::Exact,
        false => CoverStrategy::Greedy,
    };

    let minimizer = Minimizer::new()
        .with_names(names.clone())
        .with_strategy(strategy)
        .with_format(args.style.config());
    let solution = minimizer.minimize(&function)?;

    if args.kmap {
        let kmap = KMap::for_function(&function);
        println!("{}", kmap.render(&function, &names));
    }

    println!("{}", solution.expression());
    for (implicant, group) in solution.implicants().iter().zip(solution.groups()) {
        let indices: Vec<String> = group.iter().map(|idx| idx.to_string()).collect();
        println!("  {}  [{}]", implicant.term(), indices.join(", "));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Could not set up logging: {}", e);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
