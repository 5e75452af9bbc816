//! Animated backdrop: plays one of the simulations in the terminal.

mod playback;
mod render;
mod telemetry;

use anyhow::{Context, Result};
use backdrop_core::{DriverConfig, Steppable};
use backdrop_sim::{Animation, AnimationKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use tokio::signal;
use tokio::sync::watch;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info, instrument, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;

    telemetry::init_telemetry(config.log_format)?;

    info!("Starting backdrop");

    let viewport = config.viewport.viewport();
    if viewport.is_too_small(config.viewport.min_width, config.viewport.min_height) {
        warn!(
            width = viewport.width,
            height = viewport.height,
            "Window resolution is too small to display fancy stuff"
        );
        return Ok(());
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let kind = AnimationKind::pick(config.algorithm, &mut rng);
    let mut animation = Animation::new(kind, &config, rng.gen())?;
    info!(seed, "Playing: {}", animation.name());

    let (controls, playback) = playback::channel();
    playback::spawn_stdin_listener(controls)?;
    info!("Display started by default. Enter 'S' to stop");

    tokio::select! {
        result = run_animation(&mut animation, &config, playback) => {
            let steps = result?;
            info!(steps, "Animation finished");
        }
        _ = shutdown_signal() => {}
    }

    telemetry::shutdown_telemetry();

    Ok(())
}

fn load_config() -> Result<DriverConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("BACKDROP_CONFIG").ok());

    match path {
        Some(path) => DriverConfig::load(&path).with_context(|| format!("loading config {}", path)),
        None => Ok(DriverConfig::default()),
    }
}

/// Step and draw on a fixed interval until the animation completes, the
/// step cap is reached, or the caller drops this future.
#[instrument(skip_all, fields(animation = animation.name()))]
async fn run_animation(
    animation: &mut Animation,
    config: &DriverConfig,
    playback: watch::Receiver<playback::Playback>,
) -> Result<u64> {
    let tick_rate = animation.kind().tick_rate_ms(config);
    let window = config
        .viewport
        .viewport()
        .life_window(config.life.cell_width, config.life.cell_height)?;

    let mut ticker = interval(Duration::from_millis(tick_rate));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut stdout = std::io::stdout();

    loop {
        ticker.tick().await;

        if playback.borrow().paused {
            continue;
        }

        animation.step();
        if config.render {
            stdout.write_all(render::frame(animation, window).as_bytes())?;
            stdout.flush()?;
        }

        let steps = animation.steps_taken();
        if steps % 100 == 0 {
            debug!(steps, "Animation progress");
        }

        if animation.is_completed() {
            return Ok(steps);
        }
        if config.max_steps.is_some_and(|max| steps >= max) {
            info!(steps, "Step limit reached");
            return Ok(steps);
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::{AlgorithmChoice, ViewportConfig};

    fn quiet_config(algorithm: AlgorithmChoice) -> DriverConfig {
        let mut config = DriverConfig {
            algorithm,
            render: false,
            viewport: ViewportConfig {
                width: 10,
                height: 10,
                ..Default::default()
            },
            ..Default::default()
        };
        config.life.pattern = Some(vec![(0, 1), (1, 1), (2, 1)]);
        config
    }

    #[tokio::test(start_paused = true)]
    async fn test_paused_ticks_do_not_step() {
        let config = quiet_config(AlgorithmChoice::Life);
        let mut animation = Animation::new(AnimationKind::Life, &config, 1).unwrap();
        let (controls, playback) = playback::channel();
        controls.send_modify(playback::Playback::toggle);

        let outcome = tokio::time::timeout(
            Duration::from_secs(2),
            run_animation(&mut animation, &config, playback),
        )
        .await;

        assert!(outcome.is_err());
        assert_eq!(animation.steps_taken(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_after_pause() {
        let mut config = quiet_config(AlgorithmChoice::Life);
        config.max_steps = Some(3);
        let mut animation = Animation::new(AnimationKind::Life, &config, 1).unwrap();
        let (controls, playback) = playback::channel();
        controls.send_modify(playback::Playback::toggle);

        let resume = async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            controls.send_modify(playback::Playback::toggle);
        };
        let (steps, _) = tokio::join!(run_animation(&mut animation, &config, playback), resume);

        assert_eq!(steps.unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_step_limit_stops_life() {
        let mut config = quiet_config(AlgorithmChoice::Life);
        config.max_steps = Some(5);
        let mut animation = Animation::new(AnimationKind::Life, &config, 1).unwrap();
        let (_controls, playback) = playback::channel();

        let steps = run_animation(&mut animation, &config, playback).await.unwrap();

        assert_eq!(steps, 5);
        assert_eq!(animation.steps_taken(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_step_limit_stops_maze() {
        let mut config = quiet_config(AlgorithmChoice::Maze);
        config.viewport.width = 400;
        config.viewport.height = 400;
        config.max_steps = Some(5);
        let mut animation = Animation::new(AnimationKind::Maze, &config, 1).unwrap();
        let (_controls, playback) = playback::channel();

        let steps = run_animation(&mut animation, &config, playback).await.unwrap();

        assert_eq!(steps, 5);
        assert!(!animation.is_completed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_completed_maze_returns() {
        let config = quiet_config(AlgorithmChoice::Maze);
        let mut animation = Animation::new(AnimationKind::Maze, &config, 1).unwrap();
        let (_controls, playback) = playback::channel();

        let steps = run_animation(&mut animation, &config, playback).await.unwrap();

        assert_eq!(steps, 1);
        assert!(animation.is_completed());
    }
}
