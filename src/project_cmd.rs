//! Command handlers that project JSON input through a mapper configuration.

use anyhow::{Context, Result};
use log::info;

use crate::{
    cli::{AttributesArgs, MapArgs, RequestArgs},
    config::MapperConfig,
    entity::EntityFactory,
    io_utils,
    record::{Direction, Value},
    request::Request,
};

pub fn execute_map(args: &MapArgs) -> Result<()> {
    let config = MapperConfig::load(&args.config)?;
    let mut mapper = config.entity_mapper();
    mapper
        .set_arrays(io_utils::read_json(&args.input)?)
        .with_context(|| format!("Loading records from {:?}", args.input))?;

    let direction = Direction::from(args.direction);
    let entity_name = match &args.entity {
        Some(name) => name.clone(),
        None => match direction {
            Direction::FirstToSecond => mapper.factory().second_entity_name().to_string(),
            Direction::SecondToFirst => mapper.factory().first_entity_name().to_string(),
        },
    };
    let entities = mapper
        .map(direction, &entity_name)
        .with_context(|| format!("Mapping records to '{entity_name}'"))?;
    info!(
        "Mapped {} of {} record(s) to '{}' ({})",
        entities.len(),
        mapper.data().len(),
        entity_name,
        direction
    );

    let output = entities
        .iter()
        .map(|entity| Value::Object(entity.attributes()))
        .collect::<Vec<_>>();
    io_utils::write_json(args.output.as_deref(), &output, args.compact)
}

pub fn execute_attributes(args: &AttributesArgs) -> Result<()> {
    let config = MapperConfig::load(&args.config)?;
    let mut mapper = config.entity_mapper();
    mapper
        .set_arrays(io_utils::read_json(&args.input)?)
        .with_context(|| format!("Loading records from {:?}", args.input))?;

    let attributes = mapper.attributes_of_first_record();
    info!("Mapped {} attribute(s) of the first record", attributes.len());
    io_utils::write_json(args.output.as_deref(), &attributes, args.compact)
}

pub fn execute_request(args: &RequestArgs) -> Result<()> {
    let config = MapperConfig::load(&args.config)?;
    let request = Request::new(io_utils::read_json(&args.input)?, Value::Null)
        .with_context(|| format!("Loading request from {:?}", args.input))?;

    let attributes = config.request_mapper().mapped_attributes(&request);
    info!(
        "Mapped {} of {} request attribute(s)",
        attributes.len(),
        request.data_count()
    );
    io_utils::write_json(args.output.as_deref(), &attributes, args.compact)
}
