use clap::Subcommand;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Search by author and/or title; both lookups run concurrently
    Search {
        #[arg(long, help = "Author name, e.g. \"Emily Dickinson\"")]
        author: Option<String>,

        #[arg(long, help = "Poem title, e.g. \"Sonnet 18\"")]
        title: Option<String>,
    },
    /// Fetch one random poem
    Random,
}
