use crate::base;
use crate::cli;

/// Count accidents by road surface condition
#[derive(clap::Parser)]
pub struct Surfaces {
    #[command(flatten)]
    authorities_opts: cli::sharedopts::AuthoritiesOpts,
}

impl Surfaces {
    pub fn run(&self, agg: &base::Aggregator) -> anyhow::Result<cli::Output> {
        let agg = cli::util::filter_by_opts(agg, &self.authorities_opts);
        let counts = agg
            .count_by_surface_condition()
            .ranked()
            .into_iter()
            .map(|(k, n)| (k.to_string(), n))
            .collect();
        Ok(cli::Output::Counts(counts))
    }
}
