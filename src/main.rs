use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use trivia_quiz::store::JsonFileStore;
use trivia_quiz::{
    AnswerCapture, OpenTdbProvider, ProfileState, QuizError, QuizSession, SessionConfig, cli,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file holding the user profiles
    #[arg(short, long, default_value = "profiles.json")]
    profiles: PathBuf,
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), QuizError> {
    println!("Welcome to Trivia Quiz!\n");

    let username = cli::prompt_username()?;
    let store = JsonFileStore::new(args.profiles);
    let mut profile = ProfileState::load(store, &username)?;
    println!(
        "Welcome {}! Your current score: {}\n",
        profile.username(),
        profile.score()
    );

    let question_count = cli::prompt_question_count(5)?;
    let difficulty = cli::prompt_difficulty(profile.difficulty())?;
    let time_limit = cli::prompt_time_limit(10)?;

    let provider = OpenTdbProvider::new();
    let categories = match provider.categories().await {
        Ok(categories) => categories,
        Err(e) => {
            log::warn!("could not fetch categories: {}", e);
            Vec::new()
        }
    };
    let category = cli::prompt_category(&categories)?;

    let config = SessionConfig {
        question_count,
        difficulty,
        time_limit: Duration::from_secs(time_limit),
        category,
    };

    let mut capture = AnswerCapture::stdin();
    let mut session = QuizSession::new(&provider, &mut capture);
    match session.run(&config, &mut profile).await {
        Ok(_) => {}
        Err(QuizError::Provider(e)) => {
            // Not fatal: the profile is untouched, try different settings.
            log::warn!("session aborted: {}", e);
            println!("No questions found. Try different settings.");
        }
        Err(QuizError::Store(e)) => {
            // The run finished; only the save failed.
            log::warn!("failed to save profile: {}", e);
            println!("Warning: your profile could not be saved ({}).", e);
        }
        Err(e) => return Err(e),
    }

    println!(
        "\nThanks for playing, {}! High score: {}",
        profile.username(),
        profile.high_score()
    );
    Ok(())
}
