use std::{env, process::ExitCode};

use strawberry_env::cli::{parse_args, usage, Invocation};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "strawberry-env".into());

    let command = match parse_args(args) {
        Ok(Invocation::Run(command)) => command,
        Ok(Invocation::Help) => {
            eprint!("{}", usage(&program));
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprint!("{}", usage(&program));
            eprintln!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = strawberry_env::run(command).await {
        eprintln!("ERROR: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
