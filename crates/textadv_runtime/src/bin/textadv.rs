//! textadv CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use textadv_runtime::{
    Ending, Game, GameConfig, Repl, demo_world, init_logging, load_world, replay_file,
};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    game: GameConfig,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(ExitStatus::Done) => ExitCode::SUCCESS,
        Ok(ExitStatus::Lost) => ExitCode::from(2),
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

enum ExitStatus {
    Done,
    Lost,
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-banner" => config.game = config.game.with_banner(false),
            "-w" | "--world" => {
                let path = args.next().ok_or("--world requires a file")?;
                config.game = config.game.with_world(path);
            }
            "-s" | "--script" => {
                let path = args.next().ok_or("--script requires a file")?;
                config.game = config.game.with_script(path).with_echo(true);
            }
            "--log" => {
                let filter = args.next().ok_or("--log requires a filter")?;
                config.game = config.game.with_log_filter(filter);
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitStatus, Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(ExitStatus::Done);
    }

    if cli.show_version {
        println!("textadv {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitStatus::Done);
    }

    let config = cli.game;
    init_logging(&config);

    let world = match &config.world {
        Some(path) => load_world(path)?,
        None => demo_world()?,
    };
    let mut game = Game::new(world);

    let ending = match &config.script {
        Some(script) => {
            let stdout = io::stdout();
            let ending = replay_file(&mut game, script, config.echo, &mut stdout.lock())?;
            println!("\n[{}]", ending.to_string().to_uppercase());
            ending
        }
        None => {
            let mut repl = Repl::new(game)?.with_prompt(config.prompt.clone());
            if !config.show_banner {
                repl = repl.without_banner();
            }
            repl.run()?
        }
    };

    Ok(match ending {
        Ending::Won => ExitStatus::Done,
        Ending::Lost if config.is_scripted() => ExitStatus::Lost,
        Ending::Lost => ExitStatus::Done,
    })
}

fn print_help() {
    println!(
        "\x1b[1mtextadv\x1b[0m - Capability-driven text adventure

\x1b[1mUSAGE:\x1b[0m
    textadv [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -w, --world FILE      Play the world defined in FILE (JSON)
    -s, --script FILE     Replay the commands in FILE instead of reading the console
    --no-banner           Skip the usage hint
    --log FILTER          Log filter for stderr (default: warn; TEXTADV_LOG overrides)

\x1b[1mEXAMPLES:\x1b[0m
    textadv                                   Play the bundled manor
    textadv -w castle.json                    Play another world
    textadv -s worlds/manor.script            Replay a walkthrough
    TEXTADV_LOG=textadv_engine=debug textadv  Trace command resolution

\x1b[1mCOMMANDS:\x1b[0m
    look [thing|direction]    take thing [container]    go direction
    open thing [tool]         break thing [tool]        use tool [target]
    enter place               give item character       talk character
    pet animal                inventory                 quit
    Ctrl+D                    Leave the game
    Ctrl+C                    Cancel the current line

Exit status: 0 when finished, 2 when a script ends without winning, 1 on error."
    );
}
