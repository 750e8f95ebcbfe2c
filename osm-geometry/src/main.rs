use clap::{Parser, Subcommand};
use osm_geometry::{
    algorithm::conversion::conversion_ops,
    app::{OsmDocument, SfcWriter},
    config::ConversionConfiguration,
    model::{osm::geometry::OsmGeometryKind, OsmCliError},
};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct OsmAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    Convert {
        #[arg(long, help = "path to .json or .json.gz file with OSM nodes, ways and relations")]
        graph_file: String,
        #[arg(long, help = "path to file with conversion parameters")]
        configuration_file: Option<String>,
        #[arg(
            long,
            value_delimiter = ',',
            help = "comma-separated geometry kinds to assemble, overrides the configuration file"
        )]
        geometry_kinds: Option<Vec<OsmGeometryKind>>,
        #[arg(long, help = "output path for geometry collections")]
        output_directory: String,
        #[arg(long, default_value_t = false, help = "replace existing output files")]
        overwrite: bool,
    },
}

pub fn run(app: &App) -> Result<(), OsmCliError> {
    env_logger::init();
    match app {
        App::Convert {
            graph_file,
            configuration_file,
            geometry_kinds,
            output_directory,
            overwrite,
        } => {
            let mut conf = match configuration_file {
                None => Ok(ConversionConfiguration::default()),
                Some(f) => {
                    log::info!("reading conversion configuration from {f}");
                    ConversionConfiguration::try_from(f)
                }
            }?;
            if let Some(kinds) = geometry_kinds {
                conf.geometry_kinds = kinds.clone();
            }
            let document = OsmDocument::read(Path::new(graph_file))?;
            let (graph, unique_vals, metadata) = document.into_parts();
            let output = conversion_ops::convert(&graph, &unique_vals, &metadata, &conf)?;
            if !output.warnings().is_empty() {
                log::warn!(
                    "conversion finished with {} warning(s)",
                    output.warnings().len()
                );
            }
            match output.write_sfc(Path::new(output_directory), *overwrite) {
                Ok(_) => {
                    eprintln!("finished.");
                    Ok(())
                }
                Err(e) => {
                    log::error!("osm-geometry failed: {e}");
                    Err(e)
                }
            }
        }
    }
}

fn main() {
    let args = OsmAppArguments::parse();
    if let Err(e) = run(&args.app) {
        println!("{e}");
        panic!("{}", e.to_string())
    }
}
