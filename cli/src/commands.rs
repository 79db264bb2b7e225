pub mod assess;
pub mod districts;
pub mod register;

use anyhow::Context;
use appraisr_common::request::{DistrictRequest, RoomRequest};
use appraisr_core::estate::EstateService;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "appraisr")]
#[command(about = "Assess the surface and price of real-estate properties.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Register a district before the command runs (NAME=PRICE)
    #[arg(short, long = "district", value_name = "NAME=PRICE", global = true)]
    pub districts: Vec<DistrictRequest>,

    /// Reduce output; repeat for less
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Decimals shown for surfaces and prices
    #[arg(long, default_value_t = 2, global = true)]
    pub precision: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute total surface, price and largest room of a property
    #[command(alias = "a")]
    Assess {
        /// Name of the property
        property: String,
        /// District the property is located in
        #[arg(long = "in", value_name = "DISTRICT")]
        district: String,
        /// A room of the property (NAME:LENGTHxWIDTH)
        #[arg(short, long = "room", value_name = "NAME:LxW")]
        rooms: Vec<RoomRequest>,
    },
    /// Register districts and list the registry
    #[command(alias = "r")]
    Register {
        /// Districts to register (NAME=PRICE)
        #[arg(required = true, value_name = "NAME=PRICE")]
        entries: Vec<DistrictRequest>,
    },
    /// List the registered districts
    #[command(alias = "ls")]
    Districts,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Registers the districts given through `--district`.
pub fn seed_districts(service: &EstateService, districts: Vec<DistrictRequest>) -> anyhow::Result<()> {
    for request in districts {
        let name = request.name.clone();
        service
            .add_district(request)
            .with_context(|| format!("could not seed district '{name}'"))?;
    }
    Ok(())
}
