// Module declarations
mod cli;
mod config;
mod headings;
mod outline;
mod render;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}
