use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use neonarcade_core::render::Renderer;
use neonarcade_host::render::AsciiRenderer;
use neonarcade_host::{
    GameKind, HostConfig, InputScript, LightCycleControls, MatchSummary, PongControls, Session,
    run_match,
};
use neonarcade_lightcycles::LightCycles;
use neonarcade_lightcycles::config::{LightCycleConfig, Variant};
use neonarcade_pong::Pong;
use neonarcade_pong::config::PongConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = HostConfig::load();
    if let Err(e) = config
        .apply_args(std::env::args().skip(1))
        .and_then(|()| config.validate())
    {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }

    let script = match &config.script {
        Some(path) => match InputScript::load(path) {
            Ok(script) => {
                if script.is_empty() {
                    tracing::warn!(path = %path.display(), "Input script has no key events");
                } else {
                    tracing::info!(path = %path.display(), events = script.keys.len(), "Loaded input script");
                }
                script
            },
            Err(e) => {
                tracing::error!("{e}");
                return ExitCode::FAILURE;
            },
        },
        None => InputScript::default(),
    };

    tracing::info!(game = %config.game, rounds = config.rounds, "Neon Arcade starting");
    let mut renderer = AsciiRenderer::default();

    let summary = match config.game {
        GameKind::Lightcycles | GameKind::Duel => {
            let variant = if config.game == GameKind::Duel {
                Variant::Duel
            } else {
                Variant::Teams
            };
            let game = LightCycles::with_config(LightCycleConfig {
                variant,
                ..LightCycleConfig::load()
            });
            let mut controls = LightCycleControls::for_game(&game);
            let mut session = Session::new(game, config.viewport());
            let summary = run_match(&mut session, &mut controls, &script, &config).await;
            renderer.draw(session.state());
            summary
        },
        GameKind::Pong => {
            let mut controls = PongControls;
            let mut session = Session::new(Pong::with_config(PongConfig::load()), config.viewport());
            let summary = run_match(&mut session, &mut controls, &script, &config).await;
            renderer.draw(session.state());
            summary
        },
    };

    if config.render_final {
        eprint!("{}", renderer.frame());
    }
    print_summary(&summary)
}

fn print_summary(summary: &MatchSummary) -> ExitCode {
    match serde_json::to_string_pretty(summary) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode match summary");
            ExitCode::FAILURE
        },
    }
}
