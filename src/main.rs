use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use recognizer::{
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::tokenize, tokens::format_tokens},
    parser::parser::parse,
    SAMPLE_PROGRAM,
};
use tracing_subscriber::EnvFilter;

/// Checks whether a program is syntactically valid.
#[derive(Debug, Parser)]
#[command(name = "recognizer", version)]
struct Args {
    /// Source file to check, `-` for stdin. The built-in sample is used when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the token stream before recognizing it
    #[arg(short, long)]
    tokens: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let source = match read_source(args.file.as_ref(), io::stdin()) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read source: {}", error);
            return ExitCode::FAILURE;
        }
    };

    if run(&source, args.tokens) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Checks `source` and reports the verdict. Returns whether it was accepted.
fn run(source: &str, print_tokens: bool) -> bool {
    let start = Instant::now();

    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error);
            return false;
        }
    };

    tracing::debug!("Tokenized in {:?}", start.elapsed());

    if print_tokens {
        println!("Tokens: {}", format_tokens(&tokens));
    }

    let parse_start = Instant::now();
    let (parser, result) = parse(tokens);

    tracing::debug!("Parsed in {:?}", parse_start.elapsed());

    match result {
        Ok(()) => {
            if !parser.warnings().is_empty() {
                tracing::info!(count = parser.warnings().len(), "accepted with warnings");
            }
            println!("Parsing successful.");
            true
        }
        Err(error) => {
            display_error(&error);
            false
        }
    }
}

fn read_source(file: Option<&PathBuf>, mut stdin: impl Read) -> io::Result<String> {
    match file {
        None => Ok(String::from(SAMPLE_PROGRAM)),
        Some(path) if path.as_os_str() == "-" => {
            let mut source = String::new();
            stdin.read_to_string(&mut source)?;
            Ok(source)
        }
        Some(path) => read_to_string(path),
    }
}

fn display_error(error: &Error) {
    /*
        Parsing failed: Syntax error at token: (INTEGER, 3)
        Error: SyntaxError (Unexpected token: `3` (INTEGER))
    */

    println!("Parsing failed: {}", error);

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::{read_source, run, Args};

    #[test]
    fn test_sample_program_is_used_without_a_file() {
        let source = read_source(None, "ignored".as_bytes()).unwrap();

        assert_eq!(source, recognizer::SAMPLE_PROGRAM);
    }

    #[test]
    fn test_dash_reads_stdin() {
        let path = std::path::PathBuf::from("-");
        let source = read_source(Some(&path), "x = 5".as_bytes()).unwrap();

        assert_eq!(source, "x = 5");
    }

    #[test]
    fn test_source_is_read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "if (x > 2) {{ y = 4 }}").unwrap();

        let source = read_source(Some(&file.path().to_path_buf()), std::io::empty()).unwrap();

        assert_eq!(source, "if (x > 2) { y = 4 }");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::path::PathBuf::from("does/not/exist.src");

        assert!(read_source(Some(&path), std::io::empty()).is_err());
    }

    #[test]
    fn test_verdicts() {
        assert!(run(recognizer::SAMPLE_PROGRAM, false));
        assert!(run("x = 5", true));
        assert!(!run("if (x > 2) { 3 = 4 } else { y = 5 }", false));
        assert!(!run("x = 5 @", true));
    }

    #[test]
    fn test_argument_parsing() {
        let args = Args::try_parse_from(["recognizer"]).unwrap();
        assert!(args.file.is_none());
        assert!(!args.tokens);

        let args = Args::try_parse_from(["recognizer", "--tokens", "-"]).unwrap();
        assert_eq!(args.file.unwrap().as_os_str(), "-");
        assert!(args.tokens);

        let args = Args::try_parse_from(["recognizer", "-t", "prog.src"]).unwrap();
        assert_eq!(args.file.unwrap().as_os_str(), "prog.src");
        assert!(args.tokens);
    }
}
