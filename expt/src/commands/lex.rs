//! Lex command implementation.
//!
//! Loads one source file, tokenizes it, and writes the token stream as JSON
//! or as a per-kind summary. When the pass stops at a lex error the tokens
//! produced before it are still written, then the error is returned.

use std::path::PathBuf;
use std::time::Instant;

use expc_lex::{SourceOptions, SourceText, Token, TokenKind, TokenStream};

use crate::commands::common::{output_messages, write_output, OutputFormat};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source file to tokenize.
    pub input: PathBuf,
    /// Output file (default: stdout).
    pub output: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Read the whole file in one call.
    pub prefetch: bool,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

/// Token counts for one lexed source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexReport {
    /// Symbols, keywords excluded.
    pub symbols: usize,
    /// Reserved words.
    pub keywords: usize,
    /// Literals of any kind.
    pub literals: usize,
    /// Identifiers.
    pub identifiers: usize,
}

impl LexReport {
    /// Count the tokens of a stream by kind.
    pub fn from_tokens(tokens: &TokenStream) -> Self {
        tokens.iter().fold(Self::default(), |mut report, token| {
            match token {
                Token::Symbol(symbol) if symbol.is_keyword() => report.keywords += 1,
                Token::Symbol(_) => report.symbols += 1,
                Token::Literal(_) => report.literals += 1,
                Token::Ident(_) => report.identifiers += 1,
            }
            report
        })
    }

    /// Total number of tokens.
    pub fn total(&self) -> usize {
        self.symbols + self.keywords + self.literals + self.identifiers
    }
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<LexReport> {
        let start_time = Instant::now();

        let options = SourceOptions {
            prefetch: self.args.prefetch,
        };
        let source = SourceText::from_path(&self.args.input, &options)?;
        let (tokens, error) = source.tokenize();
        let report = LexReport::from_tokens(&tokens);

        let rendered = self.render(&tokens, &report)?;
        write_output(self.args.output.as_deref(), &rendered)?;

        if let Some(error) = error {
            if self.args.verbose {
                eprintln!(
                    "{} {} after {} token(s)",
                    output_messages::LEX_FAILED,
                    self.args.input.display(),
                    report.total()
                );
            }
            return Err(error.into());
        }

        if self.args.verbose {
            eprintln!(
                "{} {} ({} tokens in {:.2}ms)",
                output_messages::LEXED_FILE,
                self.args.input.display(),
                report.total(),
                start_time.elapsed().as_secs_f64() * 1000.0
            );
        }

        Ok(report)
    }

    fn render(&self, tokens: &TokenStream, report: &LexReport) -> Result<String> {
        let mut rendered = match self.args.format {
            OutputFormat::Json if self.args.pretty => serde_json::to_string_pretty(tokens)?,
            OutputFormat::Json => serde_json::to_string(tokens)?,
            OutputFormat::Summary => self.render_summary(report),
        };
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        Ok(rendered)
    }

    fn render_summary(&self, report: &LexReport) -> String {
        let mut out = format!(
            "{}: {} tokens\n",
            self.args.input.display(),
            report.total()
        );
        for (label, count) in [
            (TokenKind::Symbol.as_str(), report.symbols),
            ("Keyword", report.keywords),
            (TokenKind::Literal.as_str(), report.literals),
            (TokenKind::Identifier.as_str(), report.identifiers),
        ] {
            out.push_str(&format!("  {:<12}{}\n", label, count));
        }
        out
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = LexReport;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs) -> Result<LexReport> {
    crate::commands::traits::run::<LexCommand>(args)
}
