//! The fixed-rate driver tying input, simulation and display together.
//!
//! [`GameLoop`] owns the session outright. Each iteration polls one key,
//! applies it, runs [`game_tick`], redraws unless the bird just died, bumps
//! the tick counter and, after a crash, blocks on the restart prompt.

use crate::core::constants::TICK_INTERVAL_MS;
use crate::core::game_logic::{apply_input, Key};
use crate::core::game_state::{GameState, SessionMode};
use crate::core::tick::{game_tick, TickResult};
use crate::input::Input;
use crate::interrupt::InterruptFlag;
use crate::ui::display::Display;
use crate::ui::scene::{render_game_over, render_session};
use rand::Rng;
use std::io;
use std::thread;
use std::time::{Duration, Instant};

pub struct GameLoop<I, D, R> {
    state: GameState,
    input: I,
    display: D,
    rng: R,
    tick_interval: Duration,
    interrupt: InterruptFlag,
}

impl<I: Input, D: Display, R: Rng> GameLoop<I, D, R> {
    pub fn new(input: I, display: D, rng: R) -> Self {
        Self {
            state: GameState::new(),
            input,
            display,
            rng,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            interrupt: InterruptFlag::new(),
        }
    }

    /// Stop the loop when `interrupt` is raised.
    pub fn with_interrupt(mut self, interrupt: InterruptFlag) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Override the tick period.
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Run until the player quits.
    pub fn run(&mut self) -> io::Result<()> {
        log::info!("session started");

        while self.state.is_running() {
            if self.check_interrupt() {
                break;
            }
            let tick_start = Instant::now();

            self.step()?;
            if self.state.mode == SessionMode::Dead {
                self.prompt_restart()?;
            }
            if !self.state.is_running() {
                break;
            }

            let elapsed = tick_start.elapsed();
            if elapsed < self.tick_interval {
                thread::sleep(self.tick_interval - elapsed);
            }
        }

        log::info!(
            "session ended at tick {} with score {}",
            self.state.tick_count,
            self.state.score
        );
        Ok(())
    }

    /// One iteration of the main loop, without the restart prompt or sleep.
    pub fn step(&mut self) -> io::Result<TickResult> {
        let key = self.input.poll_key()?;
        apply_input(&mut self.state, key);
        if !self.state.is_running() {
            log::info!("quit requested");
            return Ok(TickResult::default());
        }

        let result = game_tick(&mut self.state, &mut self.rng);
        if result.died {
            log::info!(
                "bird died at tick {} with score {}",
                self.state.tick_count,
                self.state.score
            );
        } else {
            render_session(&mut self.display, &self.state)?;
        }

        self.state.tick_count += 1;
        Ok(result)
    }

    /// Show the game-over prompt until the player restarts or quits.
    pub fn prompt_restart(&mut self) -> io::Result<()> {
        loop {
            if self.check_interrupt() {
                return Ok(());
            }
            render_game_over(&mut self.display)?;
            let key = self.input.wait_key()?;
            if self.check_interrupt() {
                return Ok(());
            }
            match key {
                Key::Confirm => {
                    log::info!("restarting after score {}", self.state.score);
                    self.state.reset();
                    return Ok(());
                }
                Key::Quit => {
                    log::info!("quit from game-over prompt");
                    self.state.mode = SessionMode::Terminated;
                    return Ok(());
                }
                Key::Jump | Key::Unknown => {}
            }
        }
    }

    /// Terminate the session if an interrupt arrived.
    fn check_interrupt(&mut self) -> bool {
        if self.interrupt.is_raised() && self.state.is_running() {
            log::info!("interrupted");
            self.state.mode = SessionMode::Terminated;
        }
        !self.state.is_running()
    }
}
