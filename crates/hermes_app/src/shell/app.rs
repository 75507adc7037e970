use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use hermes_core::{update, AppState, Msg, RouteName};
use hermes_logging::{hermes_debug, hermes_info};

use super::config::ShellConfig;
use super::effects::EffectRunner;
use super::{logging, persistence, render, router};

/// What the event loop consumes: core messages from any producer thread,
/// or a request to stop.
#[derive(Debug)]
pub enum ShellMsg {
    Core(Msg),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = ShellConfig::from_env();
    logging::initialize(config.log_destination);
    hermes_info!("Hermes shell starting; backend {}", config.api_base);

    let (msg_tx, msg_rx) = mpsc::channel::<ShellMsg>();
    let runner = EffectRunner::new(msg_tx.clone(), &config);

    let mut state = AppState::new();

    // Restore the persisted session before the first navigation.
    let snapshot = persistence::load_session(&config.state_dir);
    dispatch(&mut state, Msg::RestoreSession(snapshot), &runner);

    // A fresh tab lands on the all-documents screen with no query string.
    dispatch(
        &mut state,
        Msg::TransitionTo {
            route: RouteName::AllDocuments,
            raw_query: String::new(),
        },
        &runner,
    );
    spawn_stdin_reader(msg_tx);

    while let Ok(shell_msg) = msg_rx.recv() {
        match shell_msg {
            ShellMsg::Quit => break,
            ShellMsg::Core(msg) => dispatch(&mut state, msg, &runner),
        }
    }

    hermes_info!("Hermes shell exiting");
    Ok(())
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let (mut next, effects) = update(std::mem::take(state), msg);
    runner.run(effects);
    if next.consume_dirty() {
        println!("{}", render::render(&next.view()));
        hermes_debug!(
            "Rendered view for navigation {}",
            hermes_logging::get_nav_generation()
        );
    }
    *state = next;
}

fn spawn_stdin_reader(msg_tx: mpsc::Sender<ShellMsg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match router::parse_command(line) {
                Ok(router::ShellCommand::Quit) => {
                    let _ = msg_tx.send(ShellMsg::Quit);
                    return;
                }
                Ok(command) => {
                    if let Some(msg) = command.into_msg() {
                        if msg_tx.send(ShellMsg::Core(msg)).is_err() {
                            return;
                        }
                    }
                }
                Err(help) => eprintln!("{help}"),
            }
        }
        // EOF on stdin ends the session.
        let _ = msg_tx.send(ShellMsg::Quit);
    });
}
