use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, warn};

use crate::error::{QuizError, Result};
use crate::geometry::{Coefficients, SurfaceFamily};
use crate::operations::{Equation, GenerateCoefficients};
use crate::tessellation::{MeshParams, TessellateQuadric};

use super::{Debouncer, PlotStyle, Renderer, StreakStore};

/// Render target of the quiz plot.
pub const QUIZ_TARGET: &str = "quiz-plot";

/// Delay between revealing an answer and drawing its surface.
pub const RENDER_DELAY: Duration = Duration::from_millis(100);

/// A generated quiz question.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub coefficients: Coefficients,
    /// The family the coefficients were generated for.
    pub expected: SurfaceFamily,
    /// Equation shown to the player.
    pub equation: String,
}

/// The result of answering a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub selected: SurfaceFamily,
    pub expected: SurfaceFamily,
    /// `"Name: description"` of the expected family.
    pub explanation: String,
}

/// Multiple-choice quiz over randomly generated quadrics.
#[derive(Debug)]
pub struct QuizSession<S: StreakStore> {
    score: u32,
    total: u32,
    streak: u32,
    answered: bool,
    question: Option<Question>,
    store: S,
    params: MeshParams,
    pending_render: Debouncer<Question>,
}

impl<S: StreakStore> QuizSession<S> {
    /// Starts a session, reading the persisted streak from `store`.
    #[must_use]
    pub fn new(store: S) -> Self {
        let streak = store.load();
        Self {
            score: 0,
            total: 0,
            streak,
            answered: false,
            question: None,
            store,
            params: MeshParams::quiz(),
            pending_render: Debouncer::new(RENDER_DELAY),
        }
    }

    /// Generates the next question and clears the previous plot.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NotAnswered`] if the current question has not
    /// been answered yet.
    pub fn next_question<R: Rng, P: Renderer>(
        &mut self,
        rng: &mut R,
        renderer: &mut P,
    ) -> Result<&Question> {
        if self.question.is_some() && !self.answered {
            return Err(QuizError::NotAnswered.into());
        }

        let generator = GenerateCoefficients::random(rng);
        let coefficients = generator.execute(rng)?;
        let question = Question {
            coefficients,
            expected: generator.family(),
            equation: Equation::new(coefficients).to_string(),
        };
        debug!(expected = ?question.expected, equation = %question.equation, "new quiz question");

        self.pending_render.cancel();
        if let Err(err) = renderer.purge(QUIZ_TARGET) {
            warn!(%err, "failed to clear quiz plot");
        }
        self.answered = false;
        Ok(self.question.insert(question))
    }

    /// Checks `selected` against the current question and schedules the
    /// reveal of its surface.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no question or it was already answered.
    pub fn answer(&mut self, selected: SurfaceFamily, now: Instant) -> Result<AnswerOutcome> {
        let question = self.question.as_ref().ok_or(QuizError::NoQuestion)?;
        if self.answered {
            return Err(QuizError::AlreadyAnswered.into());
        }

        let expected = question.expected;
        let correct = selected == expected;
        self.answered = true;
        self.total += 1;
        if correct {
            self.score += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        if let Err(err) = self.store.save(self.streak) {
            warn!(%err, streak = self.streak, "failed to persist quiz streak");
        }
        self.pending_render.schedule(now, question.clone());

        Ok(AnswerOutcome {
            correct,
            selected,
            expected,
            explanation: format!("{}: {}", expected.name(), expected.description()),
        })
    }

    /// Draws the revealed surface once the render delay has passed.
    /// Returns `true` if a render was attempted.
    pub fn poll<P: Renderer>(&mut self, now: Instant, renderer: &mut P) -> bool {
        let Some(question) = self.pending_render.poll(now) else {
            return false;
        };
        let mesh = TessellateQuadric::new(question.coefficients, self.params).execute();
        let style = PlotStyle::quiz(question.expected.name());
        if let Err(err) = renderer.new_plot(QUIZ_TARGET, &mesh, &style) {
            warn!(%err, "failed to render quiz plot");
        }
        true
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Number of correct answers this session.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of questions answered this session.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Consecutive correct answers, carried across sessions.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fire badge for the current streak.
    #[must_use]
    pub fn streak_badge(&self) -> &'static str {
        streak_badge(self.streak)
    }
}

/// `""` below 3, then one, two or three flames at 3, 7 and 10.
#[must_use]
pub fn streak_badge(streak: u32) -> &'static str {
    match streak {
        0..=2 => "",
        3..=6 => "🔥",
        7..=9 => "🔥🔥",
        _ => "🔥🔥🔥",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{QuadricError, RenderError, StorageError};
    use crate::session::{CookieStreakStore, MemoryStreakStore, RecordingRenderer, RenderCall};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wrong_answer(expected: SurfaceFamily) -> SurfaceFamily {
        if expected == SurfaceFamily::Cone {
            SurfaceFamily::Cylinder
        } else {
            SurfaceFamily::Cone
        }
    }

    #[test]
    fn question_matches_its_family() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut renderer = RecordingRenderer::new();
        let mut quiz = QuizSession::new(MemoryStreakStore::default());
        let t0 = Instant::now();
        for _ in 0..50 {
            let q = quiz.next_question(&mut rng, &mut renderer).unwrap().clone();
            assert_eq!(q.coefficients.classify(), q.expected);
            assert_eq!(q.equation, Equation::new(q.coefficients).to_string());
            quiz.answer(q.expected, t0).unwrap();
        }
        assert_eq!(quiz.score(), 50);
        assert_eq!(quiz.total(), 50);
    }

    #[test]
    fn must_answer_before_next() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut renderer = RecordingRenderer::new();
        let mut quiz = QuizSession::new(MemoryStreakStore::default());
        quiz.next_question(&mut rng, &mut renderer).unwrap();
        assert!(matches!(
            quiz.next_question(&mut rng, &mut renderer),
            Err(QuadricError::Quiz(QuizError::NotAnswered))
        ));
    }

    #[test]
    fn answer_requires_a_single_open_question() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut renderer = RecordingRenderer::new();
        let mut quiz = QuizSession::new(MemoryStreakStore::default());
        let t0 = Instant::now();
        assert!(matches!(
            quiz.answer(SurfaceFamily::Sphere, t0),
            Err(QuadricError::Quiz(QuizError::NoQuestion))
        ));
        quiz.next_question(&mut rng, &mut renderer).unwrap();
        quiz.answer(SurfaceFamily::Sphere, t0).unwrap();
        assert!(matches!(
            quiz.answer(SurfaceFamily::Sphere, t0),
            Err(QuadricError::Quiz(QuizError::AlreadyAnswered))
        ));
        assert_eq!(quiz.total(), 1);
    }

    #[test]
    fn streak_resets_on_miss_and_persists() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut renderer = RecordingRenderer::new();
        let mut quiz = QuizSession::new(CookieStreakStore::with_cookie("quadricStreak=2"));
        assert_eq!(quiz.streak(), 2);
        let t0 = Instant::now();

        let expected = quiz.next_question(&mut rng, &mut renderer).unwrap().expected;
        let outcome = quiz.answer(expected, t0).unwrap();
        assert!(outcome.correct);
        assert_eq!(quiz.streak(), 3);
        assert_eq!(quiz.streak_badge(), "🔥");
        assert_eq!(quiz.store().cookie(), "quadricStreak=3");

        let expected = quiz.next_question(&mut rng, &mut renderer).unwrap().expected;
        let outcome = quiz.answer(wrong_answer(expected), t0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.expected, expected);
        assert_eq!(
            outcome.explanation,
            format!("{}: {}", expected.name(), expected.description())
        );
        assert_eq!(quiz.streak(), 0);
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.total(), 2);
        assert_eq!(quiz.store().load(), 0);
    }

    #[test]
    fn reveal_is_deferred_and_cleared_on_next() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut renderer = RecordingRenderer::new();
        let mut quiz = QuizSession::new(MemoryStreakStore::default());
        let t0 = Instant::now();

        let expected = quiz.next_question(&mut rng, &mut renderer).unwrap().expected;
        quiz.answer(expected, t0).unwrap();
        assert!(!quiz.poll(t0, &mut renderer));
        assert!(quiz.poll(t0 + RENDER_DELAY, &mut renderer));

        let plot = renderer.plot(QUIZ_TARGET).unwrap();
        assert_eq!(plot.mesh.family, expected);
        assert_eq!(plot.mesh.rows(), MeshParams::quiz().resolution + 1);
        assert_eq!(plot.style.title.as_deref(), Some(expected.name()));

        quiz.next_question(&mut rng, &mut renderer).unwrap();
        assert!(renderer.plot(QUIZ_TARGET).is_none());
        assert_eq!(
            renderer.calls().last(),
            Some(&RenderCall::Purge(QUIZ_TARGET.into()))
        );
    }

    #[test]
    fn renderer_failures_are_not_fatal() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut renderer = RecordingRenderer::new();
        let mut quiz = QuizSession::new(MemoryStreakStore::default());
        let t0 = Instant::now();

        renderer.fail_next(RenderError::Backend("gone".into()));
        let expected = quiz.next_question(&mut rng, &mut renderer).unwrap().expected;
        quiz.answer(expected, t0).unwrap();
        renderer.fail_next(RenderError::Backend("gone".into()));
        assert!(quiz.poll(t0 + RENDER_DELAY, &mut renderer));
        assert!(quiz.next_question(&mut rng, &mut renderer).is_ok());
    }

    struct FailingStore;

    impl StreakStore for FailingStore {
        fn load(&self) -> u32 {
            0
        }

        fn save(&mut self, _streak: u32) -> std::result::Result<(), StorageError> {
            Err(StorageError::Write("read-only".into()))
        }
    }

    #[test]
    fn storage_failure_keeps_in_memory_streak() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut renderer = RecordingRenderer::new();
        let mut quiz = QuizSession::new(FailingStore);
        let expected = quiz.next_question(&mut rng, &mut renderer).unwrap().expected;
        assert!(quiz.answer(expected, Instant::now()).is_ok());
        assert_eq!(quiz.streak(), 1);
    }

    #[test]
    fn badge_thresholds() {
        assert_eq!(streak_badge(0), "");
        assert_eq!(streak_badge(2), "");
        assert_eq!(streak_badge(3), "🔥");
        assert_eq!(streak_badge(6), "🔥");
        assert_eq!(streak_badge(7), "🔥🔥");
        assert_eq!(streak_badge(10), "🔥🔥🔥");
        assert_eq!(streak_badge(42), "🔥🔥🔥");
    }
}
