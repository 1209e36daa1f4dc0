use std::path::PathBuf;
use std::process;

use clap::Parser;

use joingraph::join_graph::{self, SchemaGraph};
use joingraph::schema_catalog::SchemaDef;

/// Joingraph - resolve the joins connecting two tables of a relational schema
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the schema description (YAML)
    #[arg(long)]
    schema: PathBuf,

    /// Table the query selects from
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Table the query must reach
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Print the relationship graph as Graphviz DOT and exit
    #[arg(long)]
    dot: bool,
}

fn main() {
    // Defaults to INFO level, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let schema = match SchemaDef::from_yaml_file(&cli.schema) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("Schema error: {}", e);
            process::exit(1);
        }
    };
    let graph = match SchemaGraph::build(&schema) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Schema error: {}", e);
            process::exit(1);
        }
    };

    if cli.dot {
        print!("{}", join_graph::dot::render(&graph));
        return;
    }

    match (cli.from, cli.to) {
        (Some(from), Some(to)) => match join_graph::resolve(&graph, &from, &to) {
            Ok(plan) if plan.is_empty() => {
                println!("-- no joins needed: `{}` is the start table", from);
            }
            Ok(plan) => {
                for step in &plan {
                    println!("{}", step);
                }
            }
            Err(e) => {
                eprintln!("Resolution error: {}", e);
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Nothing to do: pass --from and --to, or --dot");
            process::exit(2);
        }
    }
}
