use crate::{
    interact::{user_confirm, user_input},
    render::render,
};

use bookfinder::{Client, LookupController, SearchQuery, SearchState};

use clap::Subcommand;
use eyre::{eyre, Context};
use log::trace;

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Look up a single book by ISBN
    #[clap(arg_required_else_help = true)]
    Lookup {
        /// The ISBN to search for
        isbn: String,

        /// Print the book as JSON instead of the details panel
        #[clap(long)]
        json: bool,
    },

    /// Search books interactively
    ///
    /// Prompts for an ISBN, shows the result and asks whether to search again.
    Search,
}

impl Commands {
    pub fn execute<C: Client>(
        self,
        controller: &mut LookupController<C>,
        quiet: bool,
    ) -> eyre::Result<String> {
        match self {
            Commands::Lookup { isbn, json } => {
                trace!("lookup subcommand called with the value of '{isbn}'");
                let state = controller.submit_with(&SearchQuery::new(isbn), |state| {
                    show_progress(state, quiet);
                });

                match state {
                    SearchState::Success(record) if json => serde_json::to_string_pretty(record)
                        .wrap_err("Cannot serialize the book as JSON"),
                    SearchState::Failure(message) => Err(eyre!("{message}")),
                    state => Ok(render(state)),
                }
            }
            Commands::Search => {
                trace!("search subcommand called - starting interactive form");
                println!("{}", render(controller.state()));
                loop {
                    let isbn = user_input("ISBN")?;
                    let state = controller.submit_with(&SearchQuery::new(isbn), |state| {
                        show_progress(state, quiet);
                    });
                    println!("{}\n", render(state));

                    if !user_confirm("Search another book?")? {
                        break;
                    }
                }
                Ok(String::new())
            }
        }
    }
}

/// The busy indicator, shown on stderr so stdout only carries the result.
fn show_progress(state: &SearchState, quiet: bool) {
    if state.is_loading() && !quiet {
        eprintln!("{}", render(state));
    }
}
