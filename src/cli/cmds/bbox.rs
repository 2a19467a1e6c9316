use crate::base;
use crate::cli;

/// View accidents within a bounding box
#[derive(clap::Parser)]
pub struct Bbox {
    /// Longitude and latitude ranges, boundaries included
    ///
    /// Must be in the format 'LON1:LON2,LAT1:LAT2'. Any bound may be omitted
    /// to leave that side unbounded, and a single value 'X' is shorthand for
    /// 'X:X'. A range whose minimum exceeds its maximum matches nothing.
    #[arg(allow_hyphen_values = true, value_name = "BOX")]
    bbox: base::BoundingBox,

    #[command(flatten)]
    authorities_opts: cli::sharedopts::AuthoritiesOpts,
}

impl Bbox {
    pub fn run(&self, agg: &base::Aggregator) -> anyhow::Result<cli::Output> {
        let agg = cli::util::filter_by_opts(agg, &self.authorities_opts);
        let found = agg.find_in(self.bbox).into_iter().cloned().collect();
        Ok(cli::Output::Accidents(found))
    }
}
