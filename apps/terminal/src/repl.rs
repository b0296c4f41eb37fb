//! Line-oriented terminal front end.

use anyhow::Result;
use charades_core::{
    translate, GameSession, Locale, QuestionController, SessionError, TextKey,
};
use rand::Rng;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

const QUIT: &str = ":quit";
const RESET: &str = ":reset";
const HINT: &str = ":hint";

/// What to do after a question round.
enum Flow {
    Next,
    Title,
    Quit,
}

/// Terminal game loop over arbitrary line input and byte output.
pub struct Repl<'a, I, O, R: ?Sized> {
    input: Lines<I>,
    out: O,
    session: GameSession,
    controller: &'a QuestionController,
    rng: &'a mut R,
    locale: Locale,
}

impl<'a, I, O, R> Repl<'a, I, O, R>
where
    I: AsyncBufRead + Unpin,
    O: Write,
    R: Rng + Send + ?Sized,
{
    pub fn new(input: I, out: O, controller: &'a QuestionController, rng: &'a mut R) -> Self {
        Self {
            input: input.lines(),
            out,
            locale: controller.locale(),
            session: GameSession::new(),
            controller,
            rng,
        }
    }

    /// Run until the player quits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.title()?;
            match self.next_line().await? {
                Some(line) if line == QUIT => return Ok(()),
                Some(_) => {}
                None => return Ok(()),
            }

            loop {
                match self.round().await? {
                    Flow::Next => continue,
                    Flow::Title => break,
                    Flow::Quit => return Ok(()),
                }
            }
        }
    }

    /// Present one question, take guesses until one is evaluated, then wait
    /// for the player to move on.
    async fn round(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n{}", translate(self.locale, TextKey::LoadingMessage))?;
        let question = self.session.advance(self.controller, &mut *self.rng).await?.clone();

        writeln!(self.out, "\n{}", translate(self.locale, TextKey::QuestionPrompt))?;
        writeln!(self.out, "\n    {}\n", question.emojis)?;
        if question.hint().is_some() {
            writeln!(self.out, "({HINT} {})", translate(self.locale, TextKey::HintButton))?;
        }

        loop {
            write!(self.out, "{} > ", translate(self.locale, TextKey::AnswerPlaceholder))?;
            self.out.flush()?;
            let Some(line) = self.next_line().await? else {
                return Ok(Flow::Quit);
            };
            match line.as_str() {
                QUIT => return Ok(Flow::Quit),
                RESET => return Ok(self.reset()),
                HINT => self.show_hint()?,
                guess => match self.session.submit_guess(guess) {
                    Ok(_) => break,
                    Err(SessionError::EmptyGuess) => continue,
                    Err(err) => return Err(err.into()),
                },
            }
        }

        self.reveal()?;

        loop {
            write!(self.out, "[Enter] {} > ", translate(self.locale, TextKey::NextQuestionButton))?;
            self.out.flush()?;
            let Some(line) = self.next_line().await? else {
                return Ok(Flow::Quit);
            };
            match line.as_str() {
                QUIT => return Ok(Flow::Quit),
                RESET => return Ok(self.reset()),
                HINT => self.show_hint()?,
                _ => return Ok(Flow::Next),
            }
        }
    }

    fn title(&mut self) -> Result<()> {
        writeln!(self.out, "🎬 {}", translate(self.locale, TextKey::GameTitle))?;
        writeln!(self.out, "{}", translate(self.locale, TextKey::GameSubtitle))?;
        write!(self.out, "[Enter] {} > ", translate(self.locale, TextKey::PlayButton))?;
        self.out.flush()?;
        Ok(())
    }

    fn reveal(&mut self) -> Result<()> {
        let Some(question) = self.session.current_question() else {
            return Ok(());
        };
        let feedback = self
            .session
            .feedback()
            .map(|feedback| feedback.render(self.locale))
            .unwrap_or_default();

        writeln!(self.out, "\n{feedback}")?;
        writeln!(
            self.out,
            "{} {}",
            translate(self.locale, TextKey::YourAnswerLabel),
            self.session.last_guess().unwrap_or_default()
        )?;
        writeln!(self.out, "\"{}\"", question.quote)?;
        writeln!(self.out, "{} {}", translate(self.locale, TextKey::MovieLabel), question.movie)?;
        self.stats()
    }

    fn stats(&mut self) -> Result<()> {
        let score = self.session.score();
        let mut line = format!(
            "{}: {} | {}: {}",
            translate(self.locale, TextKey::CorrectLabel),
            score.score,
            translate(self.locale, TextKey::QuestionsLabel),
            score.total_questions
        );
        if let Some(accuracy) = score.accuracy_percent() {
            line.push_str(&format!(" | {}: {accuracy}%", translate(self.locale, TextKey::AccuracyLabel)));
        }
        if score.combo_active() {
            line.push_str(&format!(
                " | {}: ×{}",
                translate(self.locale, TextKey::ComboLabel),
                score.combo_multiplier
            ));
        }
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn show_hint(&mut self) -> Result<()> {
        if let Some(hint) = self.session.reveal_hint() {
            let line = format!("{} {hint}", translate(self.locale, TextKey::HintPrefix));
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn reset(&mut self) -> Flow {
        tracing::info!(session = %self.session.token(), "session reset by player");
        self.session.reset();
        Flow::Title
    }

    async fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self
            .input
            .next_line()
            .await?
            .map(|line| line.trim().to_string()))
    }
}
