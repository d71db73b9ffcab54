use constituency_election::{
    config::{Config, ConfigError, CONFIG_PATH},
    logging::{self, LoggingError},
    Candidate, Constituency,
};
use log::{error, info};
use thiserror::Error;

/// Errors that end the demo.
#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Election(#[from] constituency_election::Error),
}

const RULE: &str = "*********************************************";

fn print_history(title: &str, entries: &[String]) {
    println!("{title}");
    for entry in entries {
        println!("{entry}");
    }
}

/// Run the configured election and print its outcome.
fn run(config: &Config) -> Result<(), Error> {
    let mut constituency: Constituency = config.scenario().build()?;
    constituency.close()?;

    println!("\n{RULE}");
    println!("{constituency}");
    println!("{RULE}\n");

    println!("Turnout rate: {:.2}%", constituency.turnout_rate());
    let winners: Vec<String> = constituency
        .find_winners()
        .into_iter()
        .map(Candidate::describe)
        .collect();
    println!("Winner(s): [{}]", winners.join(", "));

    println!("\n************* Action history - candidates ************");
    for (i, candidate) in constituency.candidates().iter().enumerate() {
        if i > 0 {
            println!();
        }
        let title = format!("Action history of {}:", candidate.full_name());
        print_history(&title, &candidate.history());
    }

    println!("\n************ Action history - constituency *************");
    print_history(
        &format!("Action history of {}:", constituency.name()),
        &constituency.history(),
    );
    Ok(())
}

fn setup() -> Result<Config, Error> {
    let config = Config::load(CONFIG_PATH)?;
    logging::init(config.log_config())?;
    info!("Initialised logging");
    Ok(config)
}

fn main() {
    let result = setup().and_then(|config| run(&config));
    if let Err(err) = result {
        error!("{err}");
        eprintln!("Error: {err}");
        std::process::exit(1)
    }
}
