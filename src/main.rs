use clap::Parser;
use minic::{
    driver::{process_dir, BatchOptions},
    frontend::{parser::Parser as SyntaxParser, tokenize, Token},
    node_counter::NodeCounter,
    printer::AstPrinter,
    read,
    utils::config::driver::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR},
    utils::write_line,
};
use minic::ast::Program;
use minic::utils::errors::{MinicError, MinicResult};
use std::{fs, path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Parse-tree front end for a small imperative teaching language",
    long_about = "Parse-tree front end for a small imperative teaching language.\n\
                 Reads declarations, functions, if/while, read/write and assignments,\n\
                 and prints the abstract syntax tree as an indented trace.\n\
                 \n\
                 Example usage:\n\
                 minic                                # Parse every file in ./IO/testCases/\n\
                 minic samples/ -o out/               # Batch mode with explicit directories\n\
                 minic samples/ --pattern '\\.txt$'    # Only files whose name matches\n\
                 minic input.txt                      # Print the tree of one file\n\
                 minic input.txt --tokens             # Dump the token stream first\n\
                 minic input.txt --timing             # Show timing statistics"
)]
struct Cli {
    // Source file, or a directory of source files
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    path: PathBuf,

    // Output file (file mode) or directory (batch mode)
    #[arg(short, long)]
    output: Option<PathBuf>,

    // Regex on file names, batch mode only
    #[arg(long)]
    pattern: Option<String>,

    // Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show timing statistics
    #[arg(short, long)]
    timing: bool,
}

// Statistics for a single-file run
#[derive(Debug, Default)]
struct ParseStats {
    lexer_time: f64,
    parser_time: f64,
    render_time: f64,
    token_count: usize,
    nodes: NodeCounter,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn dump_tokens(tokens: &[Token]) -> MinicResult<String> {
    let mut buf = String::new();
    for token in tokens {
        write_line(&mut buf, format_args!("{}\n", token))?;
    }
    Ok(buf)
}

// Lex, parse and render one file
fn parse_file(args: &Cli, stats: &mut ParseStats) -> MinicResult<String> {
    let source = read(&args.path)?;
    if args.verbose {
        println!("Read {} bytes from {}", source.len(), args.path.display());
    }

    let lexer_start = Instant::now();
    let tokens = tokenize(&source);
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();
    if args.verbose {
        println!("Lexical analysis completed in {:.3}s ({} tokens)", stats.lexer_time, stats.token_count);
    }
    if args.tokens {
        print!("{}", dump_tokens(&tokens)?);
    }

    let parser_start = Instant::now();
    let program: Program = SyntaxParser::new(&tokens).parse()?;
    stats.parser_time = parser_start.elapsed().as_secs_f64();
    stats.nodes = NodeCounter::count(&program)?;
    if args.verbose {
        println!("Parsing completed in {:.3}s", stats.parser_time);
    }

    let render_start = Instant::now();
    let trace = AstPrinter::render(&program)?;
    stats.render_time = render_start.elapsed().as_secs_f64();
    Ok(trace)
}

fn print_stats(stats: &ParseStats) {
    println!("\nParse Statistics:");
    println!("  Lexical Analysis   {:>8.3}s", stats.lexer_time);
    println!("  Parsing            {:>8.3}s", stats.parser_time);
    println!("  Rendering          {:>8.3}s", stats.render_time);
    println!("  Tokens             {:>8}", stats.token_count);
    println!("  AST Nodes          {:>8}", stats.nodes.total());
    println!("    Functions        {:>8}", stats.nodes.functions);
    println!("    Declarations     {:>8}", stats.nodes.declarations);
    println!("    Statements       {:>8}", stats.nodes.statements);
    println!("    Expressions      {:>8}", stats.nodes.expressions);
}

fn run_file(args: &Cli) -> MinicResult<()> {
    let mut stats = ParseStats::default();
    let trace = parse_file(args, &mut stats)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &trace)
                .map_err(|e| MinicError::FileWriteError(format!("{}: {}", path.display(), e)))?;
            if args.verbose {
                println!("Result written to: {}", path.display());
            }
        }
        None => print!("{}", trace),
    }
    if args.timing {
        print_stats(&stats);
    }
    Ok(())
}

fn run_batch(args: &Cli) -> MinicResult<()> {
    let start = Instant::now();
    let output_dir = args.output.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let options = BatchOptions::with_pattern(args.pattern.as_deref(), args.verbose)?;
    let summary = process_dir(&args.path, &output_dir, &options)?;
    println!(
        "All {} files processed ({} parsed, {} with syntax errors, {} skipped), see {}",
        summary.total(),
        summary.parsed,
        summary.failed,
        summary.skipped,
        output_dir.display()
    );
    if args.timing {
        println!("Total time: {:.3}s", start.elapsed().as_secs_f64());
    }
    Ok(())
}

fn main() {
    let args = Cli::parse();

    let result = if args.path.is_dir() {
        run_batch(&args)
    } else {
        if args.pattern.is_some() {
            eprintln!("Warning: --pattern is ignored when PATH is a file");
        }
        run_file(&args)
    };

    if let Err(e) = result {
        fatal(&e.to_string());
    }
}
