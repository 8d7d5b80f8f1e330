use clippybird::build_info;
use clippybird::input::TerminalInput;
use clippybird::ui::TerminalDisplay;
use clippybird::{GameLoop, InterruptFlag};
use std::io;

fn print_help() {
    println!("Clippy Bird - dodge the walls, fly through the gaps\n");
    println!("Usage: clippybird [--version | --help]\n");
    println!("Controls:");
    println!("  Space / Up        Jump");
    println!("  Enter             Restart after a crash");
    println!("  q / Esc / Ctrl+C  Quit");
    println!("\nSet RUST_LOG=debug and redirect stderr to capture logs.");
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'clippybird --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let interrupt = InterruptFlag::new();
    interrupt.install_signal_handler()?;

    let display = TerminalDisplay::new()?;
    let mut game = GameLoop::new(
        TerminalInput::new(interrupt.clone()),
        display,
        rand::thread_rng(),
    )
    .with_interrupt(interrupt);
    let result = game.run();

    // Give the terminal back before anything else is printed.
    drop(game);
    result
}
