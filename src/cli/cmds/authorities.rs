use crate::base;
use crate::cli;

/// List accident ids by district authority
#[derive(clap::Parser)]
pub struct Authorities {
    #[command(flatten)]
    authorities_opts: cli::sharedopts::AuthoritiesOpts,
}

impl Authorities {
    pub fn run(&self, agg: &base::Aggregator) -> anyhow::Result<cli::Output> {
        let agg = cli::util::filter_by_opts(agg, &self.authorities_opts);
        let groups = agg
            .group_ids_by_authority()
            .into_iter()
            .map(|(k, ids)| {
                let ids = ids.into_iter().map(str::to_string).collect();
                (k.to_string(), ids)
            })
            .collect();
        Ok(cli::Output::Groups(groups))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"
        {"id":"A3","lon":0,"lat":0,"surface":"Dry","weather":"Fine","authority":"Westminster"}
        {"id":"A1","lon":0,"lat":0,"surface":"Dry","weather":"Fine","authority":"Camden"}
        {"id":"A2","lon":0,"lat":0,"surface":"Dry","weather":"Fine","authority":"Westminster"}
        {"id":"A9","lon":0,"lat":0,"surface":"Dry","weather":"Fine","authority":"Barnet"}
    "#;

    cli::testing::generate_testcases![
        (
            no_accidents,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "-f", "a.jsonl", "authorities"],
                    res: cli::testing::ResultMatcher::OkText("No accidents.\n"),
                }],
                initial_state: cli::testing::StrState::new().with_file("a.jsonl", ""),
            }
        ),
        (
            normal_execution,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "-f", "a.jsonl", "authorities"],
                    res: cli::testing::ResultMatcher::OkText(
                        "Barnet: A9\nCamden: A1\nWestminster: A3, A2\n"
                    ),
                }],
                initial_state: cli::testing::StrState::new().with_file("a.jsonl", DATASET),
            }
        ),
        (
            filtered,
            cli::testing::Case {
                invocations: &[
                    cli::testing::Invocation {
                        args: &["", "-f", "a.jsonl", "authorities", "-a", "*n", "--fullmatch"],
                        res: cli::testing::ResultMatcher::OkExact(cli::Output::Groups(vec![
                            ("Camden".into(), vec!["A1".into()]),
                        ])),
                    },
                    cli::testing::Invocation {
                        args: &["", "-f", "a.jsonl", "authorities", "-x", "Camden,Barnet"],
                        res: cli::testing::ResultMatcher::OkText("Westminster: A3, A2\n"),
                    },
                ],
                initial_state: cli::testing::StrState::new().with_file("a.jsonl", DATASET),
            }
        ),
        (
            json,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "--json", "-f", "a.jsonl", "authorities"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Json(serde_json::json!({
                        "Barnet": ["A9"],
                        "Camden": ["A1"],
                        "Westminster": ["A3", "A2"],
                    }))),
                }],
                initial_state: cli::testing::StrState::new().with_file("a.jsonl", DATASET),
            }
        ),
    ];
}
