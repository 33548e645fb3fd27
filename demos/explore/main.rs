//! Quadrics explorer: walks the presets through the visualizer and plays a
//! few quiz rounds against an in-memory renderer.
//!
//! Usage:
//! ```text
//! cargo run --example explore
//! RUST_LOG=quadrics=debug cargo run --example explore
//! ```

use std::time::Instant;

use quadrics::geometry::SurfaceFamily;
use quadrics::input::Preset;
use quadrics::session::{
    CookieStreakStore, QuizSession, RecordingRenderer, Visualizer, DEBOUNCE_DELAY, RENDER_DELAY,
    VISUALIZER_TARGET,
};
use quadrics::tessellation::{MeshParams, SamplePointCloud};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> quadrics::Result<()> {
    // Default: WARN for everything, INFO for quadrics.
    // Override with RUST_LOG env var (e.g. RUST_LOG=quadrics=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("explore=info".parse().unwrap_or_default())
        .add_directive("quadrics=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut renderer = RecordingRenderer::new();
    let mut now = Instant::now();
    let mut viz = Visualizer::new(now);

    for preset in Preset::ALL {
        viz.load_preset(preset, now);
        now += DEBOUNCE_DELAY;
        viz.poll(now, &mut renderer);

        let defined = renderer
            .plot(VISUALIZER_TARGET)
            .map_or(0, |plot| plot.mesh.defined_points());
        let cloud = SamplePointCloud::new(viz.coefficients(), MeshParams::visualizer()).execute();
        info!(
            %preset,
            equation = %viz.equation(),
            family = %viz.family(),
            defined,
            cloud = cloud.len(),
            "{}",
            viz.description()
        );
    }

    let mut rng = StdRng::seed_from_u64(7);
    let mut quiz = QuizSession::new(CookieStreakStore::new());
    for round in 1..=5 {
        let question = quiz.next_question(&mut rng, &mut renderer)?.clone();
        // Alternate between the right answer and a guess.
        let guess = if round % 2 == 0 {
            SurfaceFamily::Sphere
        } else {
            question.expected
        };
        let outcome = quiz.answer(guess, now)?;
        now += RENDER_DELAY;
        quiz.poll(now, &mut renderer);
        info!(
            round,
            equation = %question.equation,
            correct = outcome.correct,
            streak = quiz.streak(),
            badge = quiz.streak_badge(),
            "{}",
            outcome.explanation
        );
    }
    info!(
        score = quiz.score(),
        total = quiz.total(),
        cookie = quiz.store().cookie(),
        "quiz finished"
    );

    Ok(())
}
