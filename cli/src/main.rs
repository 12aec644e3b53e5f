mod highlighter;
mod lexer;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, EditCommand, Emacs,
    FileBackedHistory, IdeMenu, KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use simpleint::{Error, EvalError, EvaluatorOptions, render_error, run, tokenize};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::highlighter::Highlighter;
use crate::lexer::BracketValidator;

const HISTORY_CAPACITY: usize = 1000;

/// SimpleInt - evaluate integer arithmetic and comparison expressions
#[derive(Parser, Debug)]
#[command(name = "simpleint")]
#[command(about = "Evaluate SimpleInt expressions", long_about = None)]
struct Args {
    /// Print the token stream before evaluating (for debugging)
    #[arg(long)]
    tokens: bool,

    /// Maximum nesting depth of parentheses, signs and function calls
    #[arg(long, default_value_t = EvaluatorOptions::default().max_depth)]
    max_depth: usize,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn history_path() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("simpleint");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!(error = %e, dir = %dir.display(), "cannot create history directory");
        return None;
    }
    Some(dir.join("history.txt"))
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let functions: Vec<String> = ["sqrt", "log2", "log10"]
        .iter()
        .map(|name| name.to_string())
        .collect();

    let completer = Box::new(DefaultCompleter::new(functions));

    // Use the interactive menu to select options from the completer
    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_min_description_width(0)
        .with_max_description_width(50)
        .with_description_offset(1)
        .with_correct_cursor_pos(false);

    let completion_menu = Box::new(ide_menu);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_validator(Box::new(BracketValidator))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(edit_mode);

    if let Some(path) = history_path() {
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
            Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
            Err(e) => warn!(error = %e, "history disabled"),
        }
    }

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("simpleint".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

fn print_tokens(input: &str) -> std::result::Result<(), Error> {
    let tokens = tokenize(input).map_err(|e| Error::from_eval(&EvalError::from(e), input))?;

    println!("=== Tokens ===");
    for token in &tokens {
        println!("{} @ {}", token, token.span);
    }
    println!();
    Ok(())
}

fn interpret_input(input: &str, args: &Args) {
    let options = EvaluatorOptions {
        max_depth: args.max_depth,
    };

    if args.tokens {
        if let Err(e) = print_tokens(input) {
            render_error(&e);
            return;
        }
    }

    match run(input, &options) {
        Ok(value) => println!("{}", value),
        Err(e) => {
            debug!(error = %e, "evaluation failed");
            render_error(&e);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        interpret_input(expr, &args);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline();

        println!("SimpleInt REPL - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = line_editor.read_line(&prompt).into_diagnostic()?;

            match sig {
                Signal::Success(buffer) => {
                    if buffer.trim().is_empty() {
                        continue;
                    }
                    interpret_input(&buffer, &args);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            if line.trim().is_empty() {
                continue;
            }
            interpret_input(&line, &args);
        }
    }

    Ok(())
}
