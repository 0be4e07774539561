use crate::demo::{run_booking_search, run_demo, BookingSearchArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use extranet::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Partner Extranet",
    about = "Run the hotel partner extranet service or explore its engines from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Query the reservation list without starting the service
    Bookings {
        #[command(subcommand)]
        command: BookingsCommand,
    },
    /// Walk through content scoring, onboarding, bookings and rates for one hotel
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum BookingsCommand {
    /// Filter and sort bookings the way the reservations page does
    Search(BookingSearchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Load bookings from a CSV export instead of the bundled sample
    #[arg(long)]
    pub(crate) bookings_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Bookings {
            command: BookingsCommand::Search(args),
        } => run_booking_search(args),
        Command::Demo(args) => run_demo(args),
    }
}
