use clap::Parser;
use log::LevelFilter;
use sss_cli::{
    args::Cli,
    output::{serialize_error, serialize_output, Output},
    runner::Runner,
};
use std::process::exit;

fn main() {
    let cli = Cli::parse();
    let default_level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::builder().filter_level(default_level).parse_default_env().init();

    let output_format = cli.output_format;
    let result = Runner.run(cli.command).and_then(|output| {
        let failed = matches!(&output, Output::Validate(validation) if !validation.all_valid());
        serialize_output(output_format, &output).map(|serialized| (serialized, failed))
    });
    match result {
        Ok((serialized, failed)) => {
            println!("{serialized}");
            if failed {
                exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", serialize_error(output_format, &e));
            exit(1);
        }
    }
}
