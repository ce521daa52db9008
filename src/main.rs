use apriori::{logging, run, AprioriError, Config, ParseOutcome};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(ParseOutcome::Run(config)) => config,
        Ok(ParseOutcome::Exit(message)) => {
            return match message.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(err) => return report(&err),
    };

    logging::init(config.log_level());

    match run(&config) {
        Ok(summary) => {
            info!(
                transactions = summary.transactions,
                levels = summary.levels,
                frequent_itemsets = summary.frequent_itemsets,
                rules = summary.rules,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}

fn report(err: &AprioriError) -> ExitCode {
    let (class, cause) = err.diagnostic();
    eprintln!("{}", class);
    eprintln!("{}", cause);
    ExitCode::from(err.exit_code())
}
