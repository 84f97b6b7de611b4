//! Implementation of the `stackr list` command.

use serde::Serialize;
use stackr_core::{domain::Dimension, error::StackrError};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

/// Allowed values of one dimension.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DimensionListing {
    dimension: &'static str,
    flag: &'static str,
    multi_valued: bool,
    tokens: Vec<&'static str>,
}

impl From<Dimension> for DimensionListing {
    fn from(d: Dimension) -> Self {
        Self {
            dimension: d.as_str(),
            flag: d.flag(),
            multi_valued: d.is_multi_valued(),
            tokens: d.tokens(),
        }
    }
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let listings = listings(args.dimension.as_deref())?;

    match args.format {
        ListFormat::Table => {
            output.header("Allowed values:")?;
            for l in &listings {
                let label = if l.multi_valued {
                    format!("{} (multi)", l.flag)
                } else {
                    l.flag.to_string()
                };
                output.field(&label, &l.tokens.join(", "))?;
            }
        }

        ListFormat::List => {
            for l in &listings {
                for token in &l.tokens {
                    output.print(&format!("{}={token}", l.dimension))?;
                }
            }
        }

        ListFormat::Json => output.json(&listings)?,
    }

    Ok(())
}

fn listings(filter: Option<&str>) -> CliResult<Vec<DimensionListing>> {
    match filter {
        Some(name) => {
            let dimension: Dimension = name.parse().map_err(StackrError::from)?;
            Ok(vec![dimension.into()])
        }
        None => Ok(Dimension::ALL.iter().copied().map(Into::into).collect()),
    }
}
