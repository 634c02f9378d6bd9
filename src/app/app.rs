//! Main application controller
//!
//! Owns the terminal, the quiz controller and the screen components, and
//! runs the draw/event loop. The loop sleeps until a key press or a reveal
//! timer arrives and redraws right after handling it.

use std::time::Duration;

use crossterm::event::Event;
use tokio::sync::mpsc;

use crate::{
    app::{
        controller::QuizController,
        events::{translate, AppEvent, InputReader},
        reveal::RevealScheduler,
        screens::{QuestionScreen, ReviewScreen, ScoreAction, ScoreScreen, WelcomeScreen},
        state::{NavigationAction, Screen},
        tui::Tui,
    },
    config::QuizConfig,
    models::default_deck,
    QuizError, Result,
};

/// TUI application
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Keyboard-driven quiz state
    shell: AppShell,
    /// Input thread poll interval
    tick_rate: Duration,
}

impl App {
    /// Create a new application instance
    pub fn new(config: QuizConfig) -> Result<Self> {
        config.validate()?;
        let tui = Tui::new()
            .map_err(|e| QuizError::TuiError(format!("Failed to create terminal: {}", e)))?;
        Ok(Self {
            tui,
            shell: AppShell::new(&config),
            tick_rate: config.tick_rate,
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| QuizError::TuiError(format!("Failed to initialize terminal: {}", e)))?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        let mut input = InputReader::spawn(self.tick_rate);
        while !self.shell.should_quit() {
            let shell = &mut self.shell;
            self.tui.draw(|f| shell.render(f))?;

            let event = self.shell.next_event(input.events()).await;
            self.shell.handle_event(event);
        }
        drop(input);
        self.tui.restore()?;
        Ok(())
    }
}

/// Everything the app loop drives except the terminal itself
pub struct AppShell {
    controller: QuizController,
    reveals: RevealScheduler,
    welcome_screen: WelcomeScreen,
    question_screen: QuestionScreen,
    score_screen: ScoreScreen,
    review_screen: ReviewScreen,
}

impl AppShell {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            controller: QuizController::new(default_deck()),
            reveals: RevealScheduler::new(config.reveal_delay),
            welcome_screen: WelcomeScreen::new(),
            question_screen: QuestionScreen::new(),
            score_screen: ScoreScreen::new(),
            review_screen: ReviewScreen::new(),
        }
    }

    pub fn controller(&self) -> &QuizController {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.controller.should_quit()
    }

    /// Draw the current screen
    pub fn render(&mut self, f: &mut ratatui::Frame) {
        match self.controller.screen() {
            Screen::Welcome => self.welcome_screen.render(f, &self.controller),
            Screen::Question(_) => self.question_screen.render(f, &self.controller),
            Screen::Score => self.score_screen.render(f, &self.controller),
            Screen::Review => self.review_screen.render(f, &self.controller),
        }
    }

    /// Wait for the next key press, resize or fired reveal timer
    pub async fn next_event(&mut self, input: &mut mpsc::UnboundedReceiver<Event>) -> AppEvent {
        loop {
            tokio::select! {
                Some(ticket) = self.reveals.recv() => return AppEvent::Reveal(ticket),
                event = input.recv() => match event {
                    Some(event) => {
                        if let Some(app_event) = translate(event) {
                            return app_event;
                        }
                    }
                    None => return AppEvent::InputClosed,
                },
            }
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_action(NavigationAction::from_key(key)),
            AppEvent::Reveal(ticket) => {
                self.controller.reveal_next(ticket);
            }
            // Redrawn by the loop
            AppEvent::Resize => {}
            AppEvent::InputClosed => self.controller.quit(),
        }
    }

    /// Dispatch a navigation action to the active screen
    pub fn handle_action(&mut self, action: NavigationAction) {
        // Global key handling
        if action == NavigationAction::Quit {
            self.controller.quit();
            return;
        }

        match self.controller.screen() {
            Screen::Welcome => self.handle_welcome_action(action),
            Screen::Question(_) => self.handle_question_action(action),
            Screen::Score => self.handle_score_action(action),
            Screen::Review => self.handle_review_action(action),
        }
    }

    fn handle_welcome_action(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Select | NavigationAction::Start => self.start_quiz(),
            NavigationAction::Back => self.controller.quit(),
            _ => {}
        }
    }

    fn handle_question_action(&mut self, action: NavigationAction) {
        let answerable = self.controller.question_view().answers_enabled;
        match action {
            NavigationAction::Left
            | NavigationAction::Right
            | NavigationAction::Next
            | NavigationAction::Previous
                if answerable =>
            {
                self.question_screen.toggle_selection()
            }
            NavigationAction::Select if answerable => {
                let choice = self.question_screen.selected().value();
                self.answer(choice);
            }
            NavigationAction::AnswerTrue => self.answer(true),
            NavigationAction::AnswerFalse => self.answer(false),
            NavigationAction::Select | NavigationAction::Advance => self.next_question(),
            _ => {}
        }
    }

    fn handle_score_action(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Left | NavigationAction::Previous => {
                self.score_screen.select_previous_action()
            }
            NavigationAction::Right | NavigationAction::Next => {
                self.score_screen.select_next_action()
            }
            NavigationAction::Select => match self.score_screen.selected_action() {
                ScoreAction::Review => self.open_review(),
                ScoreAction::Restart => self.restart(),
            },
            NavigationAction::Review => self.open_review(),
            NavigationAction::Restart => self.restart(),
            _ => {}
        }
    }

    fn handle_review_action(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.review_screen.scroll_up(),
            NavigationAction::Down => self.review_screen.scroll_down(),
            NavigationAction::Back | NavigationAction::Select => self.controller.back_to_score(),
            _ => {}
        }
    }

    fn start_quiz(&mut self) {
        self.question_screen.reset_selection();
        self.controller.start();
    }

    fn answer(&mut self, user_answer: bool) {
        if let Some(ticket) = self.controller.check_answer(user_answer) {
            self.reveals.schedule(ticket);
        }
    }

    fn next_question(&mut self) {
        self.controller.next_question();
        if self.controller.screen().question_index().is_some() {
            self.question_screen.reset_selection();
        }
    }

    fn open_review(&mut self) {
        self.review_screen.reset_scroll();
        self.controller.show_review_screen();
    }

    fn restart(&mut self) {
        self.score_screen = ScoreScreen::new();
        self.controller.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::time::{timeout, Instant};

    fn shell() -> AppShell {
        AppShell::new(&QuizConfig::new().with_reveal_delay(Duration::ZERO))
    }

    async fn wait_for_reveal(shell: &mut AppShell) {
        let (_keys, mut input) = mpsc::unbounded_channel();
        let event = timeout(Duration::from_secs(2), shell.next_event(&mut input))
            .await
            .expect("reveal timer never fired");
        assert!(matches!(event, AppEvent::Reveal(_)));
        shell.handle_event(event);
        assert!(shell.controller().question_view().next_visible);
    }

    #[tokio::test]
    async fn test_reveal_wakes_loop_before_tick() {
        let config = QuizConfig::new()
            .with_reveal_delay(Duration::from_millis(30))
            .with_tick_rate(Duration::from_secs(1));
        let mut shell = AppShell::new(&config);
        let (_keys, mut input) = mpsc::unbounded_channel();

        shell.handle_action(NavigationAction::Start);
        let answered_at = Instant::now();
        shell.handle_action(NavigationAction::AnswerTrue);

        let event = timeout(Duration::from_millis(500), shell.next_event(&mut input))
            .await
            .expect("loop slept through the reveal");
        assert_eq!(event, AppEvent::Reveal(crate::app::RevealTicket { question_index: 0 }));
        assert!(answered_at.elapsed() < config.tick_rate);

        shell.handle_event(event);
        assert!(shell.controller().question_view().next_visible);
    }

    #[tokio::test]
    async fn test_key_events_pass_through() {
        let mut shell = shell();
        let (keys, mut input) = mpsc::unbounded_channel();
        let press = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);

        keys.send(Event::FocusGained).unwrap();
        keys.send(Event::Key(press)).unwrap();
        let event = shell.next_event(&mut input).await;
        assert_eq!(event, AppEvent::Key(press));

        shell.handle_event(event);
        assert_eq!(shell.controller().screen(), Screen::Question(0));
    }

    #[tokio::test]
    async fn test_closed_input_quits() {
        let mut shell = shell();
        let (keys, mut input) = mpsc::unbounded_channel::<Event>();
        drop(keys);

        let event = shell.next_event(&mut input).await;
        assert_eq!(event, AppEvent::InputClosed);
        shell.handle_event(event);
        assert!(shell.should_quit());
    }

    #[tokio::test]
    async fn test_keyboard_round_trip() {
        let mut shell = shell();
        shell.handle_action(NavigationAction::Select);
        assert_eq!(shell.controller().screen(), Screen::Question(0));

        for _ in 0..10 {
            let truth = shell.controller().current_card().unwrap().answer;
            shell.handle_action(if truth {
                NavigationAction::AnswerTrue
            } else {
                NavigationAction::AnswerFalse
            });
            wait_for_reveal(&mut shell).await;
            shell.handle_action(NavigationAction::Advance);
        }

        assert_eq!(shell.controller().screen(), Screen::Score);
        assert_eq!(shell.controller().score_summary().score_text(), "10/10");

        shell.handle_action(NavigationAction::Review);
        assert_eq!(shell.controller().screen(), Screen::Review);
        shell.handle_action(NavigationAction::Back);
        assert_eq!(shell.controller().screen(), Screen::Score);

        shell.handle_action(NavigationAction::Right);
        shell.handle_action(NavigationAction::Select);
        assert_eq!(shell.controller().screen(), Screen::Welcome);
        assert_eq!(shell.controller().session().score(), 0);
    }

    #[tokio::test]
    async fn test_select_answers_highlighted_button() {
        let mut shell = shell();
        shell.handle_action(NavigationAction::Start);

        // Highlight "False" and confirm: wrong for "2 + 2 equals 4"
        shell.handle_action(NavigationAction::Right);
        shell.handle_action(NavigationAction::Select);
        assert!(shell.controller().session().is_answered());
        assert_eq!(shell.controller().session().score(), 0);

        // Select before the reveal does nothing
        shell.handle_action(NavigationAction::Select);
        assert_eq!(shell.controller().screen(), Screen::Question(0));

        wait_for_reveal(&mut shell).await;
        shell.handle_action(NavigationAction::Select);
        assert_eq!(shell.controller().screen(), Screen::Question(1));
    }

    #[tokio::test]
    async fn test_repeated_answer_keys_score_once() {
        let mut shell = shell();
        shell.handle_action(NavigationAction::Start);
        shell.handle_action(NavigationAction::AnswerTrue);
        shell.handle_action(NavigationAction::AnswerTrue);
        shell.handle_action(NavigationAction::AnswerFalse);
        assert_eq!(shell.controller().session().score(), 1);
    }

    #[test]
    fn test_quit_from_anywhere() {
        let mut shell = shell();
        shell.handle_action(NavigationAction::Quit);
        assert!(shell.should_quit());

        let mut shell = self::shell();
        shell.handle_action(NavigationAction::Back);
        assert!(shell.should_quit());
    }
}
