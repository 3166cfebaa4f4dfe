mod command_line_args;

use basket::apriori::{mine_with_options, AprioriOptions};
use basket::error::Result;
use basket::generate_rules::generate_rules;
use basket::logging;
use basket::metric::Metric;
use basket::report::{write_itemsets_csv, write_rules_csv, write_run_summary};
use basket::transaction_reader::read_dataset;
use command_line_args::{parse_args_or_exit, Arguments};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;
use tracing::info;

fn mine_apriori(args: &Arguments) -> Result<()> {
    // Fail on a bad metric name before doing any work.
    let metric: Metric = args.metric.parse()?;

    info!(path = %args.input_file_path, "loading transactions");
    let start = Instant::now();
    let timer = Instant::now();
    let dataset = read_dataset(&args.input_file_path)?;
    info!(
        transactions = dataset.len(),
        items = dataset.num_items(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "loaded transactions"
    );

    let timer = Instant::now();
    let mut options = AprioriOptions::new(args.min_support);
    options.max_len = args.max_len;
    let itemsets = mine_with_options(&dataset, &options)?;
    info!(
        itemsets = itemsets.len(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "apriori finished"
    );
    if itemsets.is_empty() {
        info!(min_support = args.min_support, "no frequent itemsets found");
    }

    if let Some(path) = &args.output_itemsets_path {
        let mut output = BufWriter::new(File::create(path)?);
        write_itemsets_csv(&mut output, &itemsets, dataset.itemizer())?;
        output.flush()?;
    }

    let timer = Instant::now();
    let rules = generate_rules(&itemsets, metric, args.min_threshold);
    info!(
        rules = rules.len(),
        %metric,
        min_threshold = args.min_threshold,
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "generated rules"
    );

    {
        let mut output = BufWriter::new(File::create(&args.output_rules_path)?);
        write_rules_csv(&mut output, &rules, dataset.itemizer())?;
        output.flush()?;
    }

    let stdout = io::stdout();
    write_run_summary(&mut stdout.lock(), &rules, args.top_n, dataset.itemizer())?;

    info!(elapsed_ms = start.elapsed().as_millis() as u64, "total runtime");

    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();
    logging::init(&arguments.log_level);

    if let Err(err) = mine_apriori(&arguments) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
