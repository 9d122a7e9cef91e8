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

use std::env;
use std::io;
use std::process;

use argparse::{ArgumentParser, Collect, Store, StoreOption, StoreTrue};
use basket::config::MiningConfig;
use basket::error::Result;

pub struct Arguments {
    pub input_file_paths: Vec<String>,
    pub output_rules_path: Option<String>,
    pub min_support: f64,
    pub min_confidence: f64,
    pub verbose: bool,
}

impl Arguments {
    pub fn config(&self) -> Result<MiningConfig> {
        MiningConfig::new(self.min_support, self.min_confidence)
    }

    // The rules file is written once, for the last input dataset only.
    pub fn rules_output_for(&self, input_index: usize) -> Option<&str> {
        if input_index + 1 == self.input_file_paths.len() {
            self.output_rules_path.as_deref()
        } else {
            None
        }
    }
}

pub fn parse_args_or_exit() -> Arguments {
    let mut args: Arguments = Arguments {
        input_file_paths: vec![],
        output_rules_path: None,
        min_support: 0.0,
        min_confidence: 0.0,
        verbose: false,
    };

    {
        let mut parser = ArgumentParser::new();
        parser.set_description(
            "Compares brute force, Apriori and FPGrowth frequent itemset mining \
             and association rule generation.",
        );

        parser
            .refer(&mut args.input_file_paths)
            .add_option(
                &["--input"],
                Collect,
                "Input dataset in CSV format. May be given more than once; \
                 each dataset is benchmarked in turn.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_rules_path)
            .add_option(
                &["--output"],
                StoreOption,
                "File path in which to store the FPGrowth rules of the last dataset. \
                 Format: antecedent -> consequent, confidence, support.",
            )
            .metavar("file_path");

        parser
            .refer(&mut args.min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support threshold, in range (0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut args.min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range (0,1].",
            )
            .metavar("threshold")
            .required();

        parser.refer(&mut args.verbose).add_option(
            &["--verbose"],
            StoreTrue,
            "Print every frequent itemset and rule found by each strategy.",
        );

        if env::args().count() == 1 {
            let _ = parser.print_help("Usage:", &mut io::stderr());
            process::exit(1);
        }

        if let Err(err) = parser.parse_args() {
            process::exit(err);
        }
    }

    args
}
