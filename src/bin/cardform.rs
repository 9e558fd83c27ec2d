//! Terminal front end for the card form.
//!
//! # Usage
//!
//! ```bash
//! # Group a card number
//! cardform format 1111222233334444
//!
//! # Show the card preview for some inputs
//! cardform preview --name "Jane Doe" --number 1234567
//!
//! # Validate and submit
//! cardform submit --name "A B" --number 1111222233334444 --month 04 --year 29 --cvc 123
//!
//! # Interactive session reading commands from stdin
//! cardform session
//! ```
//!
//! Set `RUST_LOG=card_form=debug` to trace state transitions on stderr.

use card_form::{format, Action, CardForm, Field, FormError, FormView};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cardform")]
#[command(author, version, about = "Credit card form with live preview and validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group a card number in blocks of four
    Format {
        /// Card number (spaces allowed)
        card_number: String,
    },

    /// Show the card preview for the given inputs
    Preview {
        #[command(flatten)]
        fields: FieldArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate the inputs and submit the form
    Submit {
        #[command(flatten)]
        fields: FieldArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Read commands from stdin and print the form after each one
    Session,
}

#[derive(Args)]
struct FieldArgs {
    /// Cardholder name
    #[arg(long)]
    name: Option<String>,

    /// Card number
    #[arg(long)]
    number: Option<String>,

    /// Expiry month (MM)
    #[arg(long)]
    month: Option<String>,

    /// Expiry year (YY)
    #[arg(long)]
    year: Option<String>,

    /// Card verification code
    #[arg(long)]
    cvc: Option<String>,
}

impl FieldArgs {
    fn into_actions(self) -> Vec<Action> {
        [
            (Field::Name, self.name),
            (Field::Number, self.number),
            (Field::Month, self.month),
            (Field::Year, self.year),
            (Field::Cvc, self.cvc),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| Action::Input(field, v)))
        .collect()
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Format { card_number } => {
            cmd_format(&card_number);
        }
        Commands::Preview { fields, output } => {
            cmd_preview(fields, output);
        }
        Commands::Submit { fields, output } => {
            cmd_submit(fields, output);
        }
        Commands::Session => {
            if let Err(e) = cmd_session() {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        }
    }
}

fn cmd_format(card_number: &str) {
    if let Some((position, character)) = format::first_invalid_character(card_number) {
        eprintln!(
            "Warning: invalid character '{}' at position {}",
            character.escape_default(),
            position
        );
    }
    println!("{}", format::format_card_number(card_number));
}

fn filled_form(fields: FieldArgs) -> CardForm {
    let mut form = CardForm::new();
    // A fresh form is in the editing view, so inputs cannot fail
    for action in fields.into_actions() {
        if let Err(e) = form.dispatch(action) {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
    form
}

fn cmd_preview(fields: FieldArgs, output: OutputFormat) {
    let form = filled_form(fields);
    print_view(&form.render(), output);
}

fn cmd_submit(fields: FieldArgs, output: OutputFormat) {
    let mut form = filled_form(fields);
    let result = form.submit();
    print_view(&form.render(), output);

    match result {
        Ok(()) => std::process::exit(0),
        Err(FormError::Rejected(_)) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

/// A line typed in a session.
enum Command {
    Apply(Action),
    Show,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "submit" | "confirm" => Ok(Command::Apply(Action::Submit)),
        "continue" | "ack" => Ok(Command::Apply(Action::Acknowledge)),
        "show" | "" => Ok(Command::Show),
        "quit" | "exit" => Ok(Command::Quit),
        other => match other.parse::<Field>() {
            Ok(field) => Ok(Command::Apply(Action::Input(field, rest.to_string()))),
            Err(e) => Err(e.to_string()),
        },
    }
}

fn cmd_session() -> io::Result<()> {
    let mut form = CardForm::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_session_view(&form);
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Apply(action)) => {
                match form.dispatch(action) {
                    Ok(()) => {}
                    Err(FormError::Rejected(report)) => {
                        println!(
                            "Submission blocked: {} field(s) need attention",
                            report.error_count()
                        );
                    }
                    Err(e) => println!("Error: {}", e),
                }
                print_session_view(&form);
            }
            Ok(Command::Show) => print_session_view(&form),
            Ok(Command::Quit) => break,
            Err(e) => println!("Error: {}", e),
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}

fn print_session_view(form: &CardForm) {
    let view = form.render();
    print_view(&view, OutputFormat::Text);
    if view.is_success() {
        println!("(type 'continue' to enter another card)");
    }
}

fn print_view(view: &FormView, output: OutputFormat) {
    match output {
        OutputFormat::Text => print!("{}", render_text(view)),
        OutputFormat::Json => match serde_json::to_string_pretty(view) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        },
    }
}

fn render_text(view: &FormView) -> String {
    let preview = &view.preview;
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "+------------------------------+");
    let _ = writeln!(out, "| {:<28} |", preview.number());
    let _ = writeln!(out, "| {:<20} {:>7} |", preview.name(), preview.expiry());
    let _ = writeln!(out, "+------------------------------+");
    let _ = writeln!(out, "| CVC {:>24} |", preview.cvc());
    let _ = writeln!(out, "+------------------------------+");

    if view.is_success() {
        let _ = writeln!(out, "Thank you! We've added your card details");
        return out;
    }

    for (field, value) in &view.fields {
        let _ = writeln!(out, "{:<16} {}", field.label(), value);
        if let Some(message) = view.message_for(*field) {
            let _ = writeln!(out, "{:<16} ^ {}", "", message);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_commands() {
        match parse_command("name Jane Appleseed") {
            Ok(Command::Apply(Action::Input(Field::Name, v))) => assert_eq!(v, "Jane Appleseed"),
            _ => panic!("Expected name input"),
        }
        match parse_command("number 1234 5678") {
            Ok(Command::Apply(Action::Input(Field::Number, v))) => assert_eq!(v, "1234 5678"),
            _ => panic!("Expected number input"),
        }
        match parse_command("cvc") {
            Ok(Command::Apply(Action::Input(Field::Cvc, v))) => assert_eq!(v, ""),
            _ => panic!("Expected empty cvc input"),
        }
    }

    #[test]
    fn test_parse_control_commands() {
        assert!(matches!(parse_command("submit"), Ok(Command::Apply(Action::Submit))));
        assert!(matches!(
            parse_command("continue"),
            Ok(Command::Apply(Action::Acknowledge))
        ));
        assert!(matches!(parse_command(""), Ok(Command::Show)));
        assert!(matches!(parse_command("quit"), Ok(Command::Quit)));
        assert!(parse_command("pin 1234").is_err());
    }

    #[test]
    fn test_submit_success_text_has_no_session_hint() {
        let args = FieldArgs {
            name: Some("A B".into()),
            number: Some("1111222233334444".into()),
            month: Some("04".into()),
            year: Some("29".into()),
            cvc: Some("123".into()),
        };
        let mut form = filled_form(args);
        form.submit().unwrap();

        let text = render_text(&form.render());
        assert!(text.contains("Thank you! We've added your card details"));
        assert!(text.contains("1111 2222 3333 4444"));
        assert!(!text.contains("continue"));
    }

    #[test]
    fn test_editing_text_lists_messages() {
        let mut form = CardForm::new();
        assert!(form.submit().is_err());

        let text = render_text(&form.render());
        assert!(!text.contains("Thank you"));
        assert_eq!(text.matches("^ Can't be blank").count(), 5);
    }

    #[test]
    fn test_field_args_order() {
        let args = FieldArgs {
            name: None,
            number: Some("1234".into()),
            month: None,
            year: Some("29".into()),
            cvc: None,
        };
        let actions = args.into_actions();
        assert_eq!(
            actions,
            vec![
                Action::Input(Field::Number, "1234".into()),
                Action::Input(Field::Year, "29".into()),
            ]
        );
    }
}
