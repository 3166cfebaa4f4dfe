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

use argparse::{ArgumentParser, Store, StoreOption};

pub struct Arguments {
    pub input_file_path: String,
    pub output_rules_path: String,
    pub output_itemsets_path: Option<String>,
    pub min_support: f64,
    pub metric: String,
    pub min_threshold: f64,
    pub max_len: Option<usize>,
    pub top_n: usize,
    pub log_level: String,
}

impl Default for Arguments {
    fn default() -> Arguments {
        Arguments {
            input_file_path: String::new(),
            output_rules_path: String::new(),
            output_itemsets_path: None,
            min_support: 0.0,
            metric: "confidence".to_owned(),
            min_threshold: 0.5,
            max_len: None,
            top_n: 5,
            log_level: "info".to_owned(),
        }
    }
}

// Range checks on the numeric thresholds happen when mining, so bad values
// surface as invalid input errors rather than here.
pub fn parse_args_or_exit() -> Arguments {
    let mut args = Arguments::default();

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Apriori frequent itemset and association rule miner.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset, one transaction per line, items separated by commas.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_rules_path)
            .add_option(
                &["--output"],
                Store,
                "File path in which to store output rules. \
                 Format: antecedent => consequent, support, confidence, lift, leverage, conviction.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_itemsets_path)
            .add_option(
                &["--itemsets-output"],
                StoreOption,
                "File path in which to store frequent itemsets. Format: itemset, count, support.",
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
            .refer(&mut args.metric)
            .add_option(
                &["--metric"],
                Store,
                "Rule metric to filter on: support, confidence, lift, leverage or conviction. \
                 Default: confidence.",
            )
            .metavar("name");

        parser
            .refer(&mut args.min_threshold)
            .add_option(
                &["--min-threshold"],
                Store,
                "Minimum value of the rule metric. Default: 0.5.",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.max_len)
            .add_option(
                &["--max-len"],
                StoreOption,
                "Maximum number of items in a frequent itemset.",
            )
            .metavar("length");

        parser
            .refer(&mut args.top_n)
            .add_option(
                &["--top-n"],
                Store,
                "Number of rules, ranked by lift, to print when done. Default: 5.",
            )
            .metavar("count");

        parser
            .refer(&mut args.log_level)
            .add_option(
                &["--log-level"],
                Store,
                "Log level filter, overridden by RUST_LOG. Default: info.",
            )
            .metavar("level");

        if env::args().count() == 1 {
            let _ = parser.print_help("Usage:", &mut io::stderr());
            process::exit(1);
        }

        if let Err(code) = parser.parse_args() {
            process::exit(code);
        }
    }

    args
}
