pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod io_utils;
pub mod mapper;
pub mod mapping;
pub mod pagination;
pub mod project_cmd;
pub mod projector;
pub mod record;
pub mod rename;
pub mod repository;
pub mod request;
pub mod request_mapper;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info};

use crate::{
    cli::{Cli, Commands},
    config::MapperConfig,
    record::Direction,
};

pub use crate::{
    entity::{Entity, EntityCatalog, EntityFactory, EntityRegistry, RecordEntity, SetterRegistry},
    error::MapperError,
    mapper::{DataItem, EntityMapper},
    mapping::MappingTable,
    projector::AttributeProjector,
    record::Record,
    rename::{RenameNode, RenameTable},
    request::Request,
    request_mapper::RequestMapper,
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("record_mapper", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Map(args) => project_cmd::execute_map(&args),
        Commands::Attributes(args) => project_cmd::execute_attributes(&args),
        Commands::Request(args) => project_cmd::execute_request(&args),
        Commands::Lookup(args) => handle_lookup(&args),
    }
}

fn handle_lookup(args: &cli::LookupArgs) -> Result<()> {
    let config = MapperConfig::load(&args.config)?;
    let table = config.mapping_table();
    let direction = Direction::from(args.direction);
    let name = table.mapped_name_or_empty(direction, &args.attribute);
    if name.is_empty() {
        info!("'{}' is not mapped ({direction})", args.attribute);
    }
    println!("{name}");
    Ok(())
}
