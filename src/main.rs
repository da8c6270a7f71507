use std::{fs, path::{Path, PathBuf}, rc::Rc, time::Instant};

use anyhow::{bail, Context as _};
use clap::{Parser, Subcommand};
use icss::{
    ast::ast::Stylesheet,
    config::config::CompilerConfig,
    errors::errors::Error,
    evaluator::evaluator::evaluate,
    generator::generator::generate,
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
    type_checker::type_checker::type_check,
};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "icss", version, about = "Compile ICSS stylesheets to CSS")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a stylesheet to CSS.
    Build(BuildArgs),
    /// Parse and type check a stylesheet without generating output.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input ICSS file.
    input: PathBuf,

    /// Output CSS path. Writes to stdout when absent.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compiler configuration JSON.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input ICSS file.
    input: PathBuf,

    /// Compiler configuration JSON.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CompilerConfig> {
    match path {
        Some(path) => CompilerConfig::load(path).map_err(|e| anyhow::anyhow!("{}", e.get_impl())),
        None => Ok(CompilerConfig::default()),
    }
}

/// Source text and the name used in diagnostics.
fn read_source(path: &Path) -> anyhow::Result<(String, String)> {
    let source = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok((source, file_name))
}

fn report(errors: &[Error], source: &str, file_name: &str) -> anyhow::Result<()> {
    for error in errors {
        eprintln!("{}", render_error(error, source));
    }
    bail!("{} error(s) in {}", errors.len(), file_name)
}

/// Tokenizes, parses and checks. Returns every diagnostic on failure.
fn front_end(source: &str, file_name: &str, config: &CompilerConfig) -> Result<Stylesheet, Vec<Error>> {
    let start = Instant::now();
    let file = Rc::new(String::from(file_name));
    let tokens = tokenize(source, Rc::clone(&file)).map_err(|e| vec![e])?;
    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let mut ast = parse(tokens, file, config).map_err(|e| vec![e])?;
    info!("Parsed in {:?}", parse_start.elapsed());

    let type_check_start = Instant::now();
    type_check(&mut ast, config).map_err(|e| vec![e])?;
    info!("Type checked in {:?}", type_check_start.elapsed());

    if ast.has_errors() {
        return Err(ast.errors().into_iter().cloned().collect());
    }
    Ok(ast)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let (source, file_name) = read_source(&args.input)?;

    match front_end(&source, &file_name, &config) {
        Ok(_) => {
            eprintln!("{}: no errors", file_name);
            Ok(())
        }
        Err(errors) => report(&errors, &source, &file_name),
    }
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let (source, file_name) = read_source(&args.input)?;
    let start = Instant::now();

    let mut ast = match front_end(&source, &file_name, &config) {
        Ok(ast) => ast,
        Err(errors) => return report(&errors, &source, &file_name),
    };

    let evaluate_start = Instant::now();
    if let Err(error) = evaluate(&mut ast, &config) {
        return report(&[error], &source, &file_name);
    }
    info!("Evaluated in {:?}", evaluate_start.elapsed());

    let css = match generate(&ast) {
        Ok(css) => css,
        Err(error) => return report(&[error], &source, &file_name),
    };
    info!("Total time: {:?}", start.elapsed());

    match args.output {
        Some(path) => fs::write(&path, css).with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", css),
    }

    Ok(())
}
