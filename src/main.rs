use bingo::bingo_rand::BingoRand;
use bingo::cli::{usage, CliArgs};
use bingo::config::GameConfig;
use bingo::display_manager::{self, DisplayCapabilities, DisplayMode};
use bingo::error::GameError;
use bingo::input::{CrosstermInput, InputEvent, InputSource, ScriptedInput};
use bingo::session::{Outcome, Session};
use bingo::word_list::WordList;
use log::{debug, info};
use std::env;
use std::io;

fn main() {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("bingo");

    // A player name is required; anything else is a usage error
    let cli = match CliArgs::parse(args.get(1..).unwrap_or_default()) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!();
            eprintln!("{}", usage(program));
            std::process::exit(2);
        }
    };

    let mut config = match GameConfig::load(cli.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    cli.apply_to(&mut config);
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    debug!("Effective config: {:?}", config);

    // Load the word list with user-friendly error handling
    let words = match WordList::from_file(&config.word_file) {
        Ok(words) => words,
        Err(GameError::WordList { path, source }) => {
            match source.kind() {
                io::ErrorKind::NotFound => {
                    eprintln!("Error: Word list not found: {}", path.display());
                    eprintln!();
                    eprintln!("Please check:");
                    eprintln!("• File path is correct (use --words <file>)");
                    eprintln!("• You're running from the right directory");
                }
                io::ErrorKind::PermissionDenied => {
                    eprintln!(
                        "Error: Permission denied accessing word list: {}",
                        path.display()
                    );
                }
                _ => eprintln!("Error: Cannot read word list '{}': {}", path.display(), source),
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Refuse early, before the terminal is taken over
    if words.len() < config.cell_count() {
        eprintln!(
            "Error: {}",
            GameError::InsufficientWords {
                available: words.len(),
                required: config.cell_count(),
            }
        );
        std::process::exit(1);
    }

    let requested = cli
        .display_mode
        .or_else(DisplayMode::from_env)
        .unwrap_or_default();
    let mode = display_manager::resolve_mode(requested, &DisplayCapabilities::detect());
    info!("Display mode: {}", mode);

    let mut input: Box<dyn InputSource> = match mode {
        DisplayMode::Headless => Box::new(ScriptedInput::from_reader(io::stdin().lock())),
        _ => Box::new(CrosstermInput::new()),
    };

    let mut rng = BingoRand::from_seed(config.seed);
    let result = play(&cli.player_name, &words, &config, &mut rng, mode, &mut input);

    // The display has been dropped here, so the terminal is back to normal
    match result {
        Ok(Outcome::Won(line)) => {
            println!("BINGO! {} won with {}.", cli.player_name, line);
        }
        Ok(Outcome::Quit) => debug!("Player quit"),
        Err(e) => {
            eprintln!("\nError: {e}");
            std::process::exit(1);
        }
    }
}

fn play(
    player_name: &str,
    words: &WordList,
    config: &GameConfig,
    rng: &mut BingoRand,
    mode: DisplayMode,
    input: &mut Box<dyn InputSource>,
) -> Result<Outcome, GameError> {
    let display = display_manager::create_display(mode)?;
    let mut session = Session::start(player_name, words, config, rng, display)?;
    let outcome = session.run(input)?;

    // Keep the win banner up until the player presses a key
    if matches!(outcome, Outcome::Won(_)) && mode != DisplayMode::Headless {
        loop {
            match input.next_event().map_err(GameError::Input)? {
                InputEvent::Resize(width, height) => {
                    session.display_mut().handle_resize(width, height);
                    session.render()?;
                }
                _ => break,
            }
        }
    }
    Ok(outcome)
}
