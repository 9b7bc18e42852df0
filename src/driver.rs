use crate::frontend::{parser::Parser, tokenize};
use crate::printer::AstPrinter;
use crate::utils::config::driver::SYNTAX_ERROR_PREFIX;
use crate::utils::errors::{MinicError, MinicResult};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Only file names matching this pattern are processed.
    pub pattern: Option<Regex>,
    pub verbose: bool,
}

impl BatchOptions {
    pub fn with_pattern(pattern: Option<&str>, verbose: bool) -> MinicResult<Self> {
        let pattern = pattern.map(Regex::new).transpose()?;
        Ok(Self { pattern, verbose })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Parsed,
    /// The parse failed; the message was written to the output file.
    SyntaxError(String),
    /// The input could not be read or its output could not be written.
    Skipped(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub parsed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.parsed + self.failed + self.skipped
    }
}

/// Regular files directly inside `dir`, sorted by name.
pub fn collect_inputs(dir: &Path, pattern: Option<&Regex>) -> MinicResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(MinicError::compilation_error(
            "input discovery",
            format!("Input directory does not exist: {}", dir.display()),
        ));
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        if pattern.map_or(true, |re| re.is_match(&name)) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parses one file and writes either its trace or its syntax error to `output`.
pub fn process_file(input: &Path, output: &Path, verbose: bool) -> MinicResult<FileOutcome> {
    let source = crate::read(input)?;

    if verbose {
        println!("Lexical analysis...");
    }
    let tokens = tokenize(&source);
    if verbose {
        println!("Lexical analysis done, parsing...");
    }

    let (contents, outcome) = match Parser::new(&tokens).parse() {
        Ok(program) => {
            if verbose {
                println!("Parsing done");
            }
            (AstPrinter::render(&program)?, FileOutcome::Parsed)
        }
        Err(e) if e.is_syntax_error() => {
            let message = e.to_string();
            println!("{}{}", SYNTAX_ERROR_PREFIX, message);
            (format!("{}{}\n", SYNTAX_ERROR_PREFIX, message), FileOutcome::SyntaxError(message))
        }
        Err(e) => return Err(e),
    };

    fs::write(output, contents).map_err(|e| {
        MinicError::FileWriteError(format!("{}: {}", output.display(), e))
    })?;
    if verbose && outcome == FileOutcome::Parsed {
        println!("Result written to: {}", output.display());
    }
    Ok(outcome)
}

/// Runs every input of `input_dir` and writes one output per input, under
/// the same file name, into `output_dir`.
pub fn process_dir(input_dir: &Path, output_dir: &Path, options: &BatchOptions) -> MinicResult<BatchSummary> {
    let inputs = collect_inputs(input_dir, options.pattern.as_ref())?;
    fs::create_dir_all(output_dir)?;

    let mut summary = BatchSummary::default();
    for input in inputs {
        let Some(name) = input.file_name() else {
            continue;
        };
        if options.verbose {
            println!("Current file: {}", name.to_string_lossy());
        }
        // A file that cannot be read or written is reported and skipped.
        let outcome = match process_file(&input, &output_dir.join(name), options.verbose) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Skipping {}: {}", name.to_string_lossy(), e);
                FileOutcome::Skipped(e.to_string())
            }
        };
        match outcome {
            FileOutcome::Parsed => summary.parsed += 1,
            FileOutcome::SyntaxError(_) => summary.failed += 1,
            FileOutcome::Skipped(_) => summary.skipped += 1,
        }
    }
    Ok(summary)
}
