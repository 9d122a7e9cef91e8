// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod command_line_args;

use basket::benchmark;
use basket::report;
use basket::transaction_reader::read_dataset;
use basket::Strategy;
use command_line_args::parse_args_or_exit;
use command_line_args::Arguments;

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn compare_algorithms(args: &Arguments) -> Result<(), Box<dyn Error>> {
    // Reject bad thresholds before touching any dataset.
    let config = args.config()?;
    let start = Instant::now();

    for (index, path) in args.input_file_paths.iter().enumerate() {
        println!("Working through {}", path);
        let timer = Instant::now();
        let dataset = read_dataset(path)?;
        info!(
            transactions = dataset.len(),
            items = dataset.itemizer().len(),
            seconds = timer.elapsed().as_secs_f64(),
            "loaded dataset"
        );

        let result = benchmark::run(&dataset, &config)?;
        let name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        for line in report::summary(&name, &result) {
            println!("{}", line);
        }

        if args.verbose {
            for strategy_report in &result.reports {
                println!("{} frequent itemsets:", strategy_report.strategy);
                for line in report::itemset_lines(&strategy_report.itemsets, dataset.itemizer()) {
                    println!("  {}", line);
                }
                println!("{} rules:", strategy_report.strategy);
                for line in report::rule_lines(&strategy_report.rules, dataset.itemizer()) {
                    println!("  {}", line);
                }
            }
        }

        if let Some(output_path) = args.rules_output_for(index) {
            if let Some(fpgrowth) = result.report(Strategy::FPGrowth) {
                let mut output = BufWriter::new(File::create(output_path)?);
                report::write_rules_csv(&mut output, &fpgrowth.rules, dataset.itemizer())?;
                info!(path = %output_path, rules = fpgrowth.rule_count(), "wrote rules");
            }
        }
        println!();
    }

    info!(seconds = start.elapsed().as_secs_f64(), "total runtime");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let arguments = parse_args_or_exit();

    if let Err(err) = compare_algorithms(&arguments) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
