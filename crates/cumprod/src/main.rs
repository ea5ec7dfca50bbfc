use crate::io::{Sink, Source};
use crate::prelude::{eprintln, *};
use clap::{CommandFactory, Parser};
use cumprod_core::algorithms::{cumulative_product, last_product};
use cumprod_core::input::parse_values;
use cumprod_core::output::{render, Format, Selection};
use std::path::PathBuf;

mod error;
mod io;
mod logging;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Compute the cumulative product of a sequence of numbers.\n\n\
                  Values are read one per line (any whitespace separates them) \
                  from INPUT or standard input, and the running products are \
                  written one per line."
)]
pub struct App {
    /// Input file, or "-" for standard input
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file, or "-" for standard output
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Only print the final value
    #[arg(short, long)]
    last: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Show debugging messages on standard error
    #[arg(short, long, env = "CUMPROD_VERBOSE", default_value = "false")]
    verbose: bool,
}

impl App {
    fn selection(&self) -> Selection {
        if self.last {
            Selection::Last
        } else {
            Selection::All
        }
    }

    fn format(&self) -> Format {
        if self.json {
            Format::Json
        } else {
            Format::Text
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    logging::init(app.verbose);

    run(app)
}

fn run(app: App) -> Result<()> {
    let source = Source::from_arg(app.input.as_deref());
    let sink = Sink::from_arg(app.output.as_deref());

    if source.is_interactive() {
        eprintln!("{}", App::command().render_usage().ansi());
        return Err(Error::MissingInput.into());
    }

    log::debug!("reading values from {source}");
    let text = source.read_to_string()?;
    let values = parse_values(&text).with_context(|| f!("Malformed input in {source}"))?;
    log::debug!("parsed {} values", values.len());

    let products = match app.selection() {
        Selection::All => cumulative_product(&values),
        Selection::Last => last_product(&values).into_iter().collect(),
    };

    log::debug!("writing {:?} output to {sink}", app.selection());
    sink.write_all(&render(&products, app.selection(), app.format()))?;

    Ok(())
}
