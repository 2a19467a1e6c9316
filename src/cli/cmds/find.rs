use crate::base;
use crate::cli;

/// Look up an accident by id
#[derive(clap::Parser)]
pub struct Find {
    /// Accident id, case-sensitive
    ///
    /// If several accidents share the id, the first one in the dataset is
    /// shown.
    id: String,
}

impl Find {
    pub fn run(&self, agg: &base::Aggregator) -> anyhow::Result<cli::Output> {
        Ok(cli::Output::Found(agg.find_by_id(&self.id).cloned()))
    }
}
