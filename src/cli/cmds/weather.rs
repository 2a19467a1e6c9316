use crate::base;
use crate::cli;

/// Rank weather conditions by number of accidents
#[derive(clap::Parser)]
pub struct Weather {
    /// Number of conditions to show
    ///
    /// Defaults to 'topCount' from '.accidents.json', or 3 if unset.
    /// Conditions with equal counts are ordered by first appearance in the
    /// dataset.
    #[arg(
        short = 'n',
        long = "top",
        value_name = "N",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    top: Option<usize>,

    #[command(flatten)]
    authorities_opts: cli::sharedopts::AuthoritiesOpts,
}

impl Weather {
    pub fn run(
        &self,
        agg: &base::Aggregator,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let n = self.top.unwrap_or(config.top_count);
        anyhow::ensure!(n > 0, "'topCount' must be at least 1");
        let agg = cli::util::filter_by_opts(agg, &self.authorities_opts);
        let ranking = agg
            .top_weather_conditions(n)
            .into_iter()
            .map(str::to_string)
            .collect();
        Ok(cli::Output::Ranking(ranking))
    }
}
