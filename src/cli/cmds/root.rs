use anyhow::Context;

use crate::base;
use crate::cli;

/// Road accident queries
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    /// Dataset to query, '.csv' or '.jsonl'
    ///
    /// Defaults to 'dataFile' from '.accidents.json', or 'accidents.csv' if
    /// unset.
    #[arg(short, long, global = true, value_name = "FILE")]
    file: Option<std::path::PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Find(cli::cmds::find::Find),
    Bbox(cli::cmds::bbox::Bbox),
    Surfaces(cli::cmds::surfaces::Surfaces),
    Weather(cli::cmds::weather::Weather),
    Authorities(cli::cmds::authorities::Authorities),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let path = self.file.as_deref().unwrap_or(&config.data_file);
        let agg = fs
            .read_dataset(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;

        let output = match self.command {
            Commands::Find(cmd) => cmd.run(&agg),
            Commands::Bbox(cmd) => cmd.run(&agg),
            Commands::Surfaces(cmd) => cmd.run(&agg),
            Commands::Weather(cmd) => cmd.run(&agg, &config),
            Commands::Authorities(cmd) => cmd.run(&agg),
        }?;
        if self.json {
            return output.into_json().context("failed to encode output");
        }
        Ok(output)
    }
}
