//! Interactive state for the visualizer and the quiz, plus the traits of
//! the collaborators they drive (renderer and streak storage).

mod debounce;
mod quiz;
mod renderer;
mod streak;
mod visualizer;

pub use debounce::Debouncer;
pub use quiz::{streak_badge, AnswerOutcome, Question, QuizSession, QUIZ_TARGET, RENDER_DELAY};
pub use renderer::{
    Lighting, PlotStyle, RecordedPlot, RecordingRenderer, RenderCall, Renderer,
};
pub use streak::{parse_streak, CookieStreakStore, MemoryStreakStore, StreakStore, STREAK_COOKIE};
pub use visualizer::{Visualizer, DEBOUNCE_DELAY, VISUALIZER_TARGET};
