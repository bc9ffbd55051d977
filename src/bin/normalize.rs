#[macro_use]
extern crate tracing;

use anyhow::{bail, Context, Result};
use bcnf_decomposition::{bcnf, fd, render::render, utils, *};
use clap::{Parser, ValueEnum};
use std::{
    fs::File,
    io::BufWriter,
    path::PathBuf,
    time::{Duration, Instant},
};

#[derive(Debug, Parser)]
struct Args {
    /// Input problem file
    #[clap(short, long, value_parser)]
    input: Option<PathBuf>,

    /// Directory of input problem files (*.json)
    #[clap(short = 'd', long, value_parser)]
    input_dir: Option<PathBuf>,

    /// Output file (JSON). Print to stdout if absent
    #[clap(short, long, value_parser)]
    output: Option<PathBuf>,

    /// Method
    #[clap(short, long, value_enum)]
    method: Method,

    /// Seed attributes (for closure method)
    #[clap(short, long, value_parser)]
    seed: Vec<u32>,

    /// Largest schema accepted by methods that enumerate subsets
    #[clap(long, value_parser, default_value_t = 12)]
    max_attributes: usize,

    /// Print the split tree (for bcnf method)
    #[clap(long)]
    tree: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    /// Attribute closure of the seed
    #[clap(alias("ac"))]
    Closure,
    /// Closure of the dependency set
    #[clap(alias("fdc"))]
    FdClosure,
    /// BCNF decomposition
    Bcnf,
    /// Candidate keys
    #[clap(alias("ck"))]
    Keys,
}

impl Method {
    fn enumerates_subsets(self) -> bool {
        matches!(self, Method::FdClosure | Method::Keys)
    }
}

fn main() -> Result<()> {
    utils::init_tracing_subscriber("info")?;
    let args = Args::parse();
    info!("args: {:#?}", args);

    let begin_load = Instant::now();
    let problems = match (&args.input, &args.input_dir) {
        (Some(input), None) => vec![Problem::load(input)?],
        (None, Some(input_dir)) => Problem::load_dir(input_dir)?,
        _ => bail!("exactly one of --input and --input-dir is required"),
    };
    let load_time = Instant::now() - begin_load;

    let reports = problems
        .iter()
        .map(|problem| solve(&args, problem, load_time))
        .collect::<Result<Vec<_>>>()?;

    match &args.output {
        Some(output) => {
            let out = BufWriter::new(
                File::create(output)
                    .with_context(|| format!("failed to create {}", output.display()))?,
            );
            serde_json::to_writer(out, &reports)?;
            info!("{} reports written to {}", reports.len(), output.display());
        }
        None => {
            for report in &reports {
                print_report(report);
            }
        }
    }

    Ok(())
}

fn solve(args: &Args, problem: &Problem, load_time: Duration) -> Result<Report> {
    info!(
        "problem {}: {} attributes, {} dependencies",
        problem.name,
        problem.schema.len(),
        problem.dependencies.len()
    );
    if args.method.enumerates_subsets() && problem.schema.len() > args.max_attributes {
        bail!(
            "problem {} has {} attributes, more than --max-attributes {}",
            problem.name,
            problem.schema.len(),
            args.max_attributes
        );
    }

    let begin = Instant::now();
    let outcome = match args.method {
        Method::Closure => {
            let seed: Schema = args.seed.iter().copied().collect();
            if !seed.is_subset(&problem.schema) {
                bail!(
                    "seed {} is not part of schema {}",
                    render(&seed),
                    render(&problem.schema)
                );
            }
            let closure = fd::attribute_closure(&seed, &problem.dependencies);
            Outcome::Closure { seed, closure }
        }
        Method::FdClosure => {
            Outcome::FdClosure(fd::fd_set_closure(&problem.schema, &problem.dependencies))
        }
        Method::Bcnf if args.tree => {
            let tree = bcnf::decompose_with_trace(&problem.schema, &problem.dependencies);
            ptree::print_tree(&tree)?;
            Outcome::Bcnf(tree.leaves())
        }
        Method::Bcnf => Outcome::Bcnf(bcnf::decompose(&problem.schema, &problem.dependencies)),
        Method::Keys => Outcome::Keys(fd::candidate_keys(&problem.schema, &problem.dependencies)),
    };
    let cal_time = Instant::now() - begin;
    info!("problem {} done in {:?}", problem.name, cal_time);

    Ok(Report {
        name: problem.name.clone(),
        method: format!("{:?}", args.method).to_lowercase(),
        load_time,
        cal_time,
        outcome,
    })
}

fn print_report(report: &Report) {
    println!("# {}", report.name);
    match &report.outcome {
        Outcome::Closure { seed, closure } => {
            println!("{}+ = {}", render(seed), render(closure));
        }
        Outcome::FdClosure(dependencies) => println!("{}", render(dependencies)),
        Outcome::Bcnf(relations) => println!("{}", render(relations)),
        Outcome::Keys(keys) => {
            for key in keys {
                println!("{}", render(key));
            }
        }
    }
}
