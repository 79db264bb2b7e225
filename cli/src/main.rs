mod commands;
mod terminal;

use appraisr_common::config::Config;
use appraisr_core::estate::EstateService;
use appraisr_core::registry::InMemoryDistricts;
use commands::{CommandLine, Commands, assess, districts, register};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet)?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        precision: commands.precision,
    };
    print::banner(&cfg);

    let service = EstateService::new(Box::new(InMemoryDistricts::new()));
    commands::seed_districts(&service, commands.districts)?;

    match commands.command {
        Commands::Assess {
            property,
            district,
            rooms,
        } => assess::assess(&service, property, district, rooms, &cfg),
        Commands::Register { entries } => register::register(&service, entries, &cfg),
        Commands::Districts => districts::districts(&service, &cfg),
    }
}
