//! Config and schema CLI commands

use nutridose::*;

pub fn cmd_config(args: &[String], config: &Config) -> Result<()> {
    match args.first().map(|s| s.as_str()).unwrap_or("show") {
        "show" => {
            println!("{}", serde_norway::to_string(config)?);
            Ok(())
        }
        "schema" => print_schema::<Config>(),
        cmd => Err(format!(
            "Unknown config subcommand: {}. Use 'show' or 'schema'.",
            cmd
        )
        .into()),
    }
}

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: report, finding, config");
            Ok(())
        }
        "report" => print_schema::<Report>(),
        "finding" => print_schema::<Finding>(),
        "config" => print_schema::<Config>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
