use minic::driver::{collect_inputs, process_dir, process_file, BatchOptions, BatchSummary, FileOutcome};
use minic::utils::errors::{MinicError, MinicResult};
use std::fs;
use std::path::PathBuf;

/// Fresh scratch directory per test, removed on drop.
struct Scratch {
    root: PathBuf,
}

impl Scratch {
    fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!("minic-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("in")).unwrap();
        Self { root }
    }

    fn input(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join("in").join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn input_bytes(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.root.join("in").join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn in_dir(&self) -> PathBuf {
        self.root.join("in")
    }

    fn out_dir(&self) -> PathBuf {
        self.root.join("out")
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

#[test]
fn test_process_file_writes_trace() -> MinicResult<()> {
    let scratch = Scratch::new("trace");
    let input = scratch.input("ok.txt", "read x;");
    let output = scratch.root.join("ok.out");
    assert_eq!(process_file(&input, &output, false)?, FileOutcome::Parsed);
    assert_eq!(fs::read_to_string(&output)?, "Program\n  Statements:\n    ReadStmt: x\n");
    Ok(())
}

#[test]
fn test_process_file_writes_syntax_error() -> MinicResult<()> {
    let scratch = Scratch::new("syntax");
    let input = scratch.input("bad.txt", "x := ;");
    let output = scratch.root.join("bad.out");
    let outcome = process_file(&input, &output, false)?;
    let message = "Syntax error at line 1: expected 'identifier, number or '('', found ';'";
    assert_eq!(outcome, FileOutcome::SyntaxError(message.to_string()));
    assert_eq!(
        fs::read_to_string(&output)?,
        format!("Syntax analysis error: {}\n", message)
    );
    Ok(())
}

#[test]
fn test_process_file_missing_input() {
    let scratch = Scratch::new("missing");
    let result = process_file(&scratch.root.join("nope.txt"), &scratch.root.join("nope.out"), false);
    assert!(matches!(result, Err(MinicError::FileReadError(_))));
}

#[test]
fn test_collect_inputs_sorted_and_filtered() -> MinicResult<()> {
    let scratch = Scratch::new("collect");
    scratch.input("b.txt", "");
    scratch.input("a.txt", "");
    scratch.input("c.src", "");
    fs::create_dir_all(scratch.in_dir().join("nested"))?;

    let all = collect_inputs(&scratch.in_dir(), None)?;
    let names: Vec<_> = all.iter().filter_map(|p| p.file_name()).map(|n| n.to_string_lossy().into_owned()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.src"]);

    let options = BatchOptions::with_pattern(Some(r"\.txt$"), false)?;
    let filtered = collect_inputs(&scratch.in_dir(), options.pattern.as_ref())?;
    assert_eq!(filtered.len(), 2);
    Ok(())
}

#[test]
fn test_collect_inputs_missing_directory() {
    let scratch = Scratch::new("nodir");
    let result = collect_inputs(&scratch.root.join("absent"), None);
    assert!(matches!(result, Err(MinicError::CompilationError { .. })));
}

#[test]
fn test_invalid_pattern() {
    let result = BatchOptions::with_pattern(Some("(unclosed"), false);
    assert!(matches!(result, Err(MinicError::InvalidPattern(_))));
}

#[test]
fn test_process_dir_continues_after_syntax_error() -> MinicResult<()> {
    let scratch = Scratch::new("batch");
    scratch.input("1_good.txt", "int a; a = 1;");
    scratch.input("2_bad.txt", "if 1 then x = 1;");
    scratch.input("3_good.txt", "write a, b;");

    let summary = process_dir(&scratch.in_dir(), &scratch.out_dir(), &BatchOptions::default())?;
    assert_eq!(summary, BatchSummary { parsed: 2, failed: 1, skipped: 0 });
    assert_eq!(summary.total(), 3);

    let bad = fs::read_to_string(scratch.out_dir().join("2_bad.txt"))?;
    assert!(bad.starts_with("Syntax analysis error: Syntax error at line 1"));
    let good = fs::read_to_string(scratch.out_dir().join("3_good.txt"))?;
    assert_eq!(good, "Program\n  Statements:\n    WriteStmt: a\n");
    Ok(())
}

#[test]
fn test_latin1_input_does_not_stop_the_batch() -> MinicResult<()> {
    let scratch = Scratch::new("latin1");
    scratch.input_bytes("1_latin1.txt", b"read x; // caf\xe9");
    scratch.input_bytes("2_latin1_code.txt", b"write \xe9;");
    scratch.input("3_good.txt", "write a;");

    let summary = process_dir(&scratch.in_dir(), &scratch.out_dir(), &BatchOptions::default())?;
    assert_eq!(summary, BatchSummary { parsed: 2, failed: 1, skipped: 0 });

    let commented = fs::read_to_string(scratch.out_dir().join("1_latin1.txt"))?;
    assert_eq!(commented, "Program\n  Statements:\n    ReadStmt: x\n");
    let rejected = fs::read_to_string(scratch.out_dir().join("2_latin1_code.txt"))?;
    assert!(rejected.contains("found '\u{fffd}'"));
    let good = fs::read_to_string(scratch.out_dir().join("3_good.txt"))?;
    assert_eq!(good, "Program\n  Statements:\n    WriteStmt: a\n");
    Ok(())
}

#[test]
fn test_unwritable_output_is_skipped() -> MinicResult<()> {
    let scratch = Scratch::new("blocked");
    scratch.input("1_blocked.txt", "read x;");
    scratch.input("2_good.txt", "read y;");
    // A directory in the way of the output file makes the write fail.
    fs::create_dir_all(scratch.out_dir().join("1_blocked.txt"))?;

    let summary = process_dir(&scratch.in_dir(), &scratch.out_dir(), &BatchOptions::default())?;
    assert_eq!(summary, BatchSummary { parsed: 1, failed: 0, skipped: 1 });
    assert_eq!(summary.total(), 2);
    let good = fs::read_to_string(scratch.out_dir().join("2_good.txt"))?;
    assert_eq!(good, "Program\n  Statements:\n    ReadStmt: y\n");
    Ok(())
}

#[test]
fn test_read_replaces_invalid_utf8() -> MinicResult<()> {
    let scratch = Scratch::new("lossy");
    let path = scratch.input_bytes("bytes.txt", b"x\xff");
    assert_eq!(minic::read(&path)?, "x\u{fffd}");
    Ok(())
}
